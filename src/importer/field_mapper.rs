// ==========================================
// 供应商产能平衡分析系统 - 字段映射器
// ==========================================
// 职责: RawTable → 领域记录 (必需列检查 + 类型转换 + 月份列识别)
// 红线: 表结构错误必须在任何计算开始前上报
// ==========================================

use crate::domain::capacity::CapacityInputRecord;
use crate::domain::demand::{DemandTable, DemandWideRecord, MonthColumn};
use crate::domain::types::MonthKey;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;

/// Capacity 表的必需列
pub const CAPACITY_COLUMNS: [&str; 6] = [
    "Vendor",
    "Process",
    "Lines",
    "HoursPerDay",
    "OutputPerHourPerLine",
    "WorkingDays",
];

/// Demand 表的标识列 (其余非空表头全部视为月份列)
pub const DEMAND_ID_COLUMNS: [&str; 3] = ["Vendor", "Item", "Process"];

pub struct FieldMapper {
    demand_year: i32, // 月份缩写解析使用的固定年份
}

impl FieldMapper {
    pub fn new(demand_year: i32) -> Self {
        Self { demand_year }
    }

    // ==========================================
    // Capacity 表映射
    // ==========================================

    /// 将产能原始表映射为输入记录
    ///
    /// # 错误
    /// - 缺少必需列 → ColumnMissing
    /// - 因子为空 → FieldMappingError
    /// - 因子无法解析 → TypeConversionError
    pub fn map_capacity_table(&self, table: &RawTable) -> ImportResult<Vec<CapacityInputRecord>> {
        let cols = resolve_columns(table, "Capacity", &CAPACITY_COLUMNS)?;

        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 2; // 第 1 行为表头
            records.push(CapacityInputRecord {
                vendor: cell_at(row, cols[0]).to_string(),
                process: cell_at(row, cols[1]).to_string(),
                lines: parse_required_f64(row, cols[2], "Lines", row_number)?,
                hours_per_day: parse_required_f64(row, cols[3], "HoursPerDay", row_number)?,
                output_per_hour_per_line: parse_required_f64(
                    row,
                    cols[4],
                    "OutputPerHourPerLine",
                    row_number,
                )?,
                working_days: parse_required_f64(row, cols[5], "WorkingDays", row_number)?,
            });
        }
        Ok(records)
    }

    // ==========================================
    // Demand 表映射
    // ==========================================

    /// 将需求原始表映射为宽表
    ///
    /// 月份列在运行时发现: 标识列之外的全部非空表头;
    /// 列标签在此统一规范化,未知标签立即报错
    pub fn map_demand_table(&self, table: &RawTable) -> ImportResult<DemandTable> {
        let id_cols = resolve_columns(table, "Demand", &DEMAND_ID_COLUMNS)?;

        let mut months = Vec::new();
        let mut month_cols = Vec::new();
        for (idx, header) in table.headers.iter().enumerate() {
            if id_cols.contains(&idx) {
                continue;
            }
            if header.is_empty() {
                continue; // 无标题的空列直接忽略
            }
            let key = MonthKey::parse_label(header, self.demand_year).ok_or_else(|| {
                ImportError::MonthColumnError {
                    table: "Demand".to_string(),
                    label: header.clone(),
                }
            })?;
            months.push(MonthColumn {
                label: header.clone(),
                key,
            });
            month_cols.push(idx);
        }

        let mut rows = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 2;
            let mut demands = Vec::with_capacity(month_cols.len());
            for (&col, month) in month_cols.iter().zip(months.iter()) {
                demands.push(parse_optional_f64(row, col, &month.label, row_number)?);
            }
            rows.push(DemandWideRecord {
                vendor: cell_at(row, id_cols[0]).to_string(),
                item: cell_at(row, id_cols[1]).to_string(),
                process: cell_at(row, id_cols[2]).to_string(),
                demands,
            });
        }

        Ok(DemandTable { months, rows })
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 解析必需列下标,缺失即报错
fn resolve_columns(
    table: &RawTable,
    table_name: &str,
    required: &[&str],
) -> ImportResult<Vec<usize>> {
    required
        .iter()
        .map(|col| {
            table
                .column_index(col)
                .ok_or_else(|| ImportError::ColumnMissing {
                    table: table_name.to_string(),
                    column: col.to_string(),
                })
        })
        .collect()
}

/// 读取行内单元格 (行长度不足时视为空)
fn cell_at(row: &[String], col: usize) -> &str {
    row.get(col).map(|s| s.as_str()).unwrap_or("")
}

/// 解析必填浮点字段
fn parse_required_f64(
    row: &[String],
    col: usize,
    field: &str,
    row_number: usize,
) -> ImportResult<f64> {
    let value = cell_at(row, col);
    if value.is_empty() {
        return Err(ImportError::FieldMappingError {
            row: row_number,
            message: format!("{} 不能为空", field),
        });
    }
    value
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversionError {
            row: row_number,
            field: field.to_string(),
            message: format!("无法解析为浮点数: {}", value),
        })
}

/// 解析可空浮点字段 (空单元格 → None)
fn parse_optional_f64(
    row: &[String],
    col: usize,
    field: &str,
    row_number: usize,
) -> ImportResult<Option<f64>> {
    let value = cell_at(row, col);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ImportError::TypeConversionError {
            row: row_number,
            field: field.to_string(),
            message: format!("无法解析为浮点数: {}", value),
        })
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_map_capacity_table() {
        let table = make_table(
            &[
                "Vendor",
                "Process",
                "Lines",
                "HoursPerDay",
                "OutputPerHourPerLine",
                "WorkingDays",
            ],
            &[&["V1", "Assembly", "2", "8", "10", "20"]],
        );

        let mapper = FieldMapper::new(2025);
        let records = mapper.map_capacity_table(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vendor, "V1");
        assert_eq!(records[0].lines, 2.0);
        assert_eq!(records[0].working_days, 20.0);
    }

    #[test]
    fn test_map_capacity_missing_column() {
        // 缺 WorkingDays 列
        let table = make_table(
            &["Vendor", "Process", "Lines", "HoursPerDay", "OutputPerHourPerLine"],
            &[],
        );

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_capacity_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::ColumnMissing { ref column, .. }) if column == "WorkingDays"
        ));
    }

    #[test]
    fn test_map_capacity_empty_factor() {
        let table = make_table(
            &[
                "Vendor",
                "Process",
                "Lines",
                "HoursPerDay",
                "OutputPerHourPerLine",
                "WorkingDays",
            ],
            &[&["V1", "Assembly", "", "8", "10", "20"]],
        );

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_capacity_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::FieldMappingError { row: 2, .. })
        ));
    }

    #[test]
    fn test_map_capacity_bad_number() {
        let table = make_table(
            &[
                "Vendor",
                "Process",
                "Lines",
                "HoursPerDay",
                "OutputPerHourPerLine",
                "WorkingDays",
            ],
            &[&["V1", "Assembly", "two", "8", "10", "20"]],
        );

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_capacity_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { ref field, .. }) if field == "Lines"
        ));
    }

    #[test]
    fn test_map_demand_table_month_discovery() {
        let table = make_table(
            &["Vendor", "Item", "Process", "Jan", "Feb", "2025-03"],
            &[
                &["V1", "A", "Assembly", "100", "", "300"],
                &["V1", "B", "Assembly", "50", "60", "70"],
            ],
        );

        let mapper = FieldMapper::new(2025);
        let demand = mapper.map_demand_table(&table).unwrap();

        assert_eq!(demand.months.len(), 3);
        assert_eq!(demand.months[0].label, "Jan");
        assert_eq!(demand.months[0].key.to_string(), "2025-01");
        assert_eq!(demand.months[2].label, "2025-03");
        assert_eq!(demand.months[2].key.to_string(), "2025-03");

        assert_eq!(demand.rows.len(), 2);
        assert_eq!(demand.rows[0].demands, vec![Some(100.0), None, Some(300.0)]);
    }

    #[test]
    fn test_map_demand_unknown_month_label() {
        let table = make_table(&["Vendor", "Item", "Process", "Janu"], &[]);

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_demand_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::MonthColumnError { ref label, .. }) if label == "Janu"
        ));
    }

    #[test]
    fn test_map_demand_missing_id_column() {
        let table = make_table(&["Vendor", "Process", "Jan"], &[]);

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_demand_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::ColumnMissing { ref column, .. }) if column == "Item"
        ));
    }

    #[test]
    fn test_map_demand_bad_cell_value() {
        let table = make_table(
            &["Vendor", "Item", "Process", "Jan"],
            &[&["V1", "A", "Assembly", "abc"]],
        );

        let mapper = FieldMapper::new(2025);
        let result = mapper.map_demand_table(&table);
        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { ref field, .. }) if field == "Jan"
        ));
    }

    #[test]
    fn test_map_demand_no_month_columns() {
        // 仅标识列也是合法输入,产出空月份集
        let table = make_table(&["Vendor", "Item", "Process"], &[&["V1", "A", "Assembly"]]);

        let mapper = FieldMapper::new(2025);
        let demand = mapper.map_demand_table(&table).unwrap();
        assert!(demand.months.is_empty());
        assert_eq!(demand.rows.len(), 1);
        assert!(demand.rows[0].demands.is_empty());
    }
}
