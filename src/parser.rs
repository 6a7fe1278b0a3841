// ==========================================
// SRA 配置生成工具 - 表格解析器
// ==========================================
// 支持: CSV (.csv)
// 职责: 文件存在性检查 + 解析为 表头/行映射 结构
// ==========================================

use crate::error::{ConfigGenError, GenerateResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 解析后的表格
///
/// 表头与数据行分开保存: 仅有表头而无数据行的文件
/// 仍可区分 "缺列" 与 "列为空" 两种错误
#[derive(Debug)]
pub struct ParsedTable {
    /// 表头 (按文件顺序)
    pub headers: Vec<String>,
    /// 数据行 (列名 -> 单元格值)
    pub rows: Vec<HashMap<String, String>>,
}

impl ParsedTable {
    /// 检查表头中是否存在指定列
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// 表格解析能力接口
///
/// 契约: 产出按文件顺序排列的行, 每行为 列名 -> 字符串值 的映射
pub trait TableParser {
    fn parse(&self, path: &Path) -> GenerateResult<ParsedTable>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl TableParser for CsvParser {
    fn parse(&self, path: &Path) -> GenerateResult<ParsedTable> {
        // 检查文件存在
        if !path.is_file() {
            return Err(ConfigGenError::InputNotFound(path.display().to_string()));
        }

        // 打开 CSV 文件
        let file = File::open(path).map_err(|e| ConfigGenError::ParseError {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ConfigGenError::ParseError {
                path: path.display().to_string(),
                cause: e.to_string(),
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ConfigGenError::ParseError {
                path: path.display().to_string(),
                cause: e.to_string(),
            })?;

            let mut row_map = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(ParsedTable { headers, rows })
    }
}
