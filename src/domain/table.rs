// ==========================================
// 供应商产能平衡分析系统 - 报表表格模型
// ==========================================
// 职责: 与展示无关的表格载体
// 红线: 列语义在建表时打标 (ColumnKind),导出层不得按表头文字猜测
// ==========================================

use crate::domain::types::MonthKey;
use serde::{Deserialize, Serialize};

// ==========================================
// ColumnKind - 列语义
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKind {
    Text,    // 文本列
    Number,  // 数值列
    Month,   // 月份列,按 "YYYY-MM" 文本导出
    Percent, // 百分比列,导出时按阈值着色
}

// ==========================================
// ColumnSpec - 列定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,   // 表头
    pub kind: ColumnKind, // 列语义
}

impl ColumnSpec {
    pub fn new(header: &str, kind: ColumnKind) -> Self {
        Self {
            header: header.to_string(),
            kind,
        }
    }
}

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Month(MonthKey),
}

impl CellValue {
    /// 数值内容 (非数值单元格返回 None)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// 展示文本 (列宽估算与回显使用)
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(v) => format_number(*v),
            CellValue::Month(m) => m.to_string(),
        }
    }
}

/// 数值展示: 整数不带小数位,其余保留两位
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

// ==========================================
// ReportTable - 报表表格
// ==========================================
// 行与列定义按下标对齐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub name: String,              // 表名 (即导出工作表名)
    pub columns: Vec<ColumnSpec>,  // 列定义 (含语义标记)
    pub rows: Vec<Vec<CellValue>>, // 行数据
}

impl ReportTable {
    pub fn new(name: &str, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_text() {
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::Text("V1".to_string()).display_text(), "V1");
        assert_eq!(CellValue::Number(3200.0).display_text(), "3200");
        assert_eq!(CellValue::Number(106.67).display_text(), "106.67");

        let month = MonthKey::new(2025, 1).unwrap();
        assert_eq!(CellValue::Month(month).display_text(), "2025-01");
    }

    #[test]
    fn test_cell_as_number() {
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::Text("1.5".to_string()).as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }
}
