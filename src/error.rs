// ==========================================
// SRA 配置生成工具 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 所有错误均为致命错误, 不做本地重试
// ==========================================

use thiserror::Error;

/// 配置生成错误类型
///
/// 五个阶段各对应一个错误变体, 任一错误都会终止本次运行
#[derive(Error, Debug)]
pub enum ConfigGenError {
    // ===== 文件相关错误 =====
    #[error("元数据文件不存在: {0}")]
    InputNotFound(String),

    #[error("CSV 解析失败 ({path}): {cause}")]
    ParseError { path: String, cause: String },

    // ===== 结构校验错误 =====
    #[error("元数据缺少必需列: {0}")]
    MissingColumn(String),

    #[error("列 {0} 中未找到任何有效的 SRA 编号")]
    EmptyResult(String),

    // ===== 输出错误 =====
    #[error("配置文件写入失败 ({path}): {cause}")]
    WriteError { path: String, cause: String },
}

/// 配置生成统一 Result 类型
pub type GenerateResult<T> = Result<T, ConfigGenError>;
