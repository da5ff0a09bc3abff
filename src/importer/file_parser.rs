// ==========================================
// 供应商产能平衡分析系统 - 文件解析器
// ==========================================
// 职责: Excel/CSV → RawTable (表头 + 字符串化数据行)
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 红线: 月份列顺序有业务含义,按列位置保留,不做表头到值的字典化
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - 原始表
// ==========================================
// headers 与每行单元格按下标对齐,单元格已 trim
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// 查找列下标 (表头精确匹配)
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 文件为 RawTable
    ///
    /// 首行为表头,完全空白的数据行跳过
    pub fn parse(&self, path: &Path) -> ImportResult<RawTable> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let cells: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // 跳过完全空白的行
            if cells.iter().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(cells);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser (按工作表名读取)
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 读取指定工作表为 RawTable
    ///
    /// # 参数
    /// - `path`: 工作簿路径
    /// - `sheet_name`: 工作表名
    ///
    /// # 错误
    /// - 工作表不存在 → SheetNotFound
    pub fn parse_sheet(&self, path: &Path, sheet_name: &str) -> ImportResult<RawTable> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 工作表缺失在任何计算开始前上报
        if !workbook.sheet_names().iter().any(|n| n.as_str() == sheet_name) {
            return Err(ImportError::SheetNotFound(sheet_name.to_string()));
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows_iter = range.rows();
        let header_row = rows_iter.next().ok_or_else(|| {
            ImportError::ExcelParseError(format!("工作表 {} 无表头行", sheet_name))
        })?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in rows_iter {
            let cells: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            // 跳过完全空白的行
            if cells.iter().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(cells);
        }

        Ok(RawTable { headers, rows })
    }
}
