// ==========================================
// SRA 配置生成工具 - 配置生成器
// ==========================================
// 职责: 五步流水线
//   1. 存在性检查  2. 解析  3. 结构校验
//   4. 提取+去重   5. 序列化写出
// 约定: 任一步失败即终止, 输出文件仅在全部校验通过后写入
// ==========================================

use crate::error::{ConfigGenError, GenerateResult};
use crate::parser::{CsvParser, ParsedTable, TableParser};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// SRA 元数据中的运行编号列名
pub const RUN_COLUMN: &str = "Run";

/// 输出配置文档
///
/// 字段顺序即 YAML 键顺序, 扩展时不得按字母重排
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SraConfig {
    /// 去重后的 SRA 运行编号列表 (保持首次出现顺序)
    pub sra_ids: Vec<String>,
}

/// 单次生成的结果报告
#[derive(Debug)]
pub struct GenerateReport {
    /// 写入的 SRA 编号数量
    pub id_count: usize,
    /// 输出文件路径
    pub output_path: PathBuf,
}

/// 配置生成器
///
/// 解析能力通过 [`TableParser`] 注入, 便于测试替换
pub struct ConfigGenerator {
    parser: Box<dyn TableParser>,
}

impl Default for ConfigGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigGenerator {
    /// 创建使用 CSV 解析器的生成器
    pub fn new() -> Self {
        Self {
            parser: Box::new(CsvParser),
        }
    }

    /// 使用自定义解析器创建生成器
    pub fn with_parser(parser: Box<dyn TableParser>) -> Self {
        Self { parser }
    }

    /// 执行完整生成流水线
    ///
    /// 成功时返回生成报告; 任一阶段失败返回对应错误,
    /// 此时输出文件不会被创建或修改
    pub fn generate(&self, input: &Path, output: &Path) -> GenerateResult<GenerateReport> {
        // 阶段 1+2: 存在性检查与解析 (解析器内部先检查文件存在)
        let table = self.parser.parse(input)?;
        tracing::debug!(
            "已解析 {}: {} 列, {} 行",
            input.display(),
            table.headers.len(),
            table.rows.len()
        );

        // 阶段 3: 结构校验
        if !table.has_column(RUN_COLUMN) {
            return Err(ConfigGenError::MissingColumn(RUN_COLUMN.to_string()));
        }

        // 阶段 4: 提取 + 去重
        let sra_ids = extract_run_ids(&table);
        if sra_ids.is_empty() {
            return Err(ConfigGenError::EmptyResult(RUN_COLUMN.to_string()));
        }

        // 阶段 5: 序列化写出 (先序列化为字符串, 校验全部通过后才触碰输出文件)
        let config = SraConfig { sra_ids };
        let yaml = serde_yaml::to_string(&config).map_err(|e| ConfigGenError::WriteError {
            path: output.display().to_string(),
            cause: e.to_string(),
        })?;
        fs::write(output, yaml).map_err(|e| ConfigGenError::WriteError {
            path: output.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(GenerateReport {
            id_count: config.sra_ids.len(),
            output_path: output.to_path_buf(),
        })
    }
}

/// 从 Run 列提取去重后的编号序列
///
/// NULL 标准化: 去除首尾空白后为空串的值视为缺失;
/// 去重保持首次出现顺序
fn extract_run_ids(table: &ParsedTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for row in &table.rows {
        let value = match row.get(RUN_COLUMN) {
            Some(v) => v.trim(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            ids.push(value.to_string());
        }
    }

    ids
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table_with_runs(values: &[&str]) -> ParsedTable {
        ParsedTable {
            headers: vec!["Run".to_string(), "BioSample".to_string()],
            rows: values
                .iter()
                .map(|v| {
                    let mut row = HashMap::new();
                    row.insert("Run".to_string(), v.to_string());
                    row.insert("BioSample".to_string(), "SAMN01".to_string());
                    row
                })
                .collect(),
        }
    }

    #[test]
    fn test_extract_dedup_preserves_first_occurrence_order() {
        let table = table_with_runs(&["SRR003", "SRR001", "SRR003", "SRR002", "SRR001"]);

        let ids = extract_run_ids(&table);
        assert_eq!(ids, vec!["SRR003", "SRR001", "SRR002"]);
    }

    #[test]
    fn test_extract_normalizes_blank_to_null() {
        let table = table_with_runs(&["SRR001", "", "   ", "SRR002"]);

        let ids = extract_run_ids(&table);
        assert_eq!(ids, vec!["SRR001", "SRR002"], "空白值应按缺失处理");
    }

    #[test]
    fn test_extract_all_null_yields_empty() {
        let table = table_with_runs(&["", "  "]);

        assert!(extract_run_ids(&table).is_empty());
    }
}
