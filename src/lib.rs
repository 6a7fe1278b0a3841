// ==========================================
// SRA 配置生成工具 - 核心库
// ==========================================
// 职责: SraRunTable.csv -> config.yaml
// 流程: 存在性检查 -> 解析 -> 结构校验 -> 提取去重 -> 写出
// 定位: 一次性批处理工具, 无重试
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 错误类型
pub mod error;

// 表格解析层
pub mod parser;

// 配置生成层
pub mod generator;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use error::{ConfigGenError, GenerateResult};
pub use generator::{ConfigGenerator, GenerateReport, SraConfig, RUN_COLUMN};
pub use parser::{CsvParser, ParsedTable, TableParser};

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
