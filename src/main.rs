// ==========================================
// SRA 配置生成工具 - 主入口
// ==========================================
// 输入: config/SraRunTable.csv (固定路径)
// 输出: config/config.yaml (固定路径)
// 退出码: 0 成功 / 1 任意阶段失败
// ==========================================

use sra_config_gen::{logging, ConfigGenerator};
use std::path::Path;

/// SRA 元数据文件路径
const INPUT_CSV: &str = "config/SraRunTable.csv";

/// 输出配置文件路径
const OUTPUT_YAML: &str = "config/config.yaml";

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("SRA 配置生成工具");
    tracing::info!("版本: {}", sra_config_gen::VERSION);
    tracing::info!("==================================================");

    let generator = ConfigGenerator::new();
    match generator.generate(Path::new(INPUT_CSV), Path::new(OUTPUT_YAML)) {
        Ok(report) => {
            tracing::info!(
                "config.yaml 已生成: {} 个 SRA 运行编号, 输出 {}",
                report.id_count,
                report.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!("配置生成失败: {}", e);
            std::process::exit(1);
        }
    }
}
