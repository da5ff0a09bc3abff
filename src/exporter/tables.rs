// ==========================================
// 供应商产能平衡分析系统 - 报表表格构建
// ==========================================
// 职责: 领域记录 → ReportTable
// 红线: 百分比列在此标记为 ColumnKind::Percent,导出层只认标记不认表头文字
// ==========================================

use crate::domain::capacity::CapacityRecord;
use crate::domain::demand::DemandTable;
use crate::domain::summary::{JoinedRecord, TotalSummaryRecord, VendorSummaryRecord};
use crate::domain::table::{CellValue, ColumnKind, ColumnSpec, ReportTable};

fn number_or_empty(value: Option<f64>) -> CellValue {
    match value {
        Some(v) => CellValue::Number(v),
        None => CellValue::Empty,
    }
}

/// Capacity_Input 表 (回显输入 + 计算后的产能列)
pub fn capacity_input_table(records: &[CapacityRecord]) -> ReportTable {
    let columns = vec![
        ColumnSpec::new("Vendor", ColumnKind::Text),
        ColumnSpec::new("Process", ColumnKind::Text),
        ColumnSpec::new("Lines", ColumnKind::Number),
        ColumnSpec::new("HoursPerDay", ColumnKind::Number),
        ColumnSpec::new("OutputPerHourPerLine", ColumnKind::Number),
        ColumnSpec::new("WorkingDays", ColumnKind::Number),
        ColumnSpec::new("Capacity", ColumnKind::Number),
    ];

    let mut table = ReportTable::new("Capacity_Input", columns);
    for record in records {
        table.push_row(vec![
            CellValue::Text(record.vendor.clone()),
            CellValue::Text(record.process.clone()),
            CellValue::Number(record.lines),
            CellValue::Number(record.hours_per_day),
            CellValue::Number(record.output_per_hour_per_line),
            CellValue::Number(record.working_days),
            CellValue::Number(record.capacity),
        ]);
    }
    table
}

/// Demand_Input 表 (宽表回显,保留原始月份标签)
pub fn demand_input_table(demand: &DemandTable) -> ReportTable {
    let mut columns = vec![
        ColumnSpec::new("Vendor", ColumnKind::Text),
        ColumnSpec::new("Item", ColumnKind::Text),
        ColumnSpec::new("Process", ColumnKind::Text),
    ];
    for month in &demand.months {
        columns.push(ColumnSpec::new(&month.label, ColumnKind::Number));
    }

    let mut table = ReportTable::new("Demand_Input", columns);
    for row in &demand.rows {
        let mut cells = vec![
            CellValue::Text(row.vendor.clone()),
            CellValue::Text(row.item.clone()),
            CellValue::Text(row.process.clone()),
        ];
        for value in &row.demands {
            cells.push(number_or_empty(*value));
        }
        table.push_row(cells);
    }
    table
}

/// 连接结果表 (工作表名由供应商选择决定)
pub fn process_result_table(name: &str, records: &[JoinedRecord]) -> ReportTable {
    let columns = vec![
        ColumnSpec::new("Vendor", ColumnKind::Text),
        ColumnSpec::new("Process", ColumnKind::Text),
        ColumnSpec::new("Month", ColumnKind::Month),
        ColumnSpec::new("Demand", ColumnKind::Number),
        ColumnSpec::new("Capacity", ColumnKind::Number),
        ColumnSpec::new("Fulfillment_%", ColumnKind::Percent),
        ColumnSpec::new("Status", ColumnKind::Text),
    ];

    let mut table = ReportTable::new(name, columns);
    for record in records {
        table.push_row(vec![
            CellValue::Text(record.vendor.clone()),
            CellValue::Text(record.process.clone()),
            CellValue::Month(record.month),
            CellValue::Number(record.demand),
            number_or_empty(record.capacity),
            number_or_empty(record.fulfillment_pct),
            CellValue::Text(record.status.to_string()),
        ]);
    }
    table
}

/// 供应商汇总表 (工作表名由供应商选择决定)
pub fn vendor_summary_table(name: &str, records: &[VendorSummaryRecord]) -> ReportTable {
    let columns = vec![
        ColumnSpec::new("Vendor", ColumnKind::Text),
        ColumnSpec::new("Month", ColumnKind::Month),
        ColumnSpec::new("Capacity", ColumnKind::Number),
        ColumnSpec::new("Demand", ColumnKind::Number),
        ColumnSpec::new("Fulfillment_%", ColumnKind::Percent),
    ];

    let mut table = ReportTable::new(name, columns);
    for record in records {
        table.push_row(vec![
            CellValue::Text(record.vendor.clone()),
            CellValue::Month(record.month),
            number_or_empty(record.capacity),
            CellValue::Number(record.demand),
            number_or_empty(record.fulfillment_pct),
        ]);
    }
    table
}

/// Total_Summary 表
pub fn total_summary_table(records: &[TotalSummaryRecord]) -> ReportTable {
    let columns = vec![
        ColumnSpec::new("Month", ColumnKind::Month),
        ColumnSpec::new("Capacity", ColumnKind::Number),
        ColumnSpec::new("Demand", ColumnKind::Number),
        ColumnSpec::new("Fulfillment_%", ColumnKind::Percent),
    ];

    let mut table = ReportTable::new("Total_Summary", columns);
    for record in records {
        table.push_row(vec![
            CellValue::Month(record.month),
            CellValue::Number(record.capacity),
            CellValue::Number(record.demand),
            number_or_empty(record.fulfillment_pct),
        ]);
    }
    table
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demand::{DemandWideRecord, MonthColumn};
    use crate::domain::types::{FulfillmentStatus, MonthKey};

    #[test]
    fn test_process_result_table_tags_percent_column() {
        let records = vec![JoinedRecord {
            vendor: "V1".to_string(),
            process: "Assembly".to_string(),
            month: MonthKey::new(2025, 1).unwrap(),
            demand: 3000.0,
            capacity: Some(3200.0),
            fulfillment_pct: Some(106.67),
            status: FulfillmentStatus::Ok,
        }];

        let table = process_result_table("Process_Result", &records);
        assert_eq!(table.name, "Process_Result");
        assert_eq!(table.columns[5].header, "Fulfillment_%");
        assert_eq!(table.columns[5].kind, ColumnKind::Percent);
        assert_eq!(table.rows[0][6], CellValue::Text("OK".to_string()));
        // 其余列不打百分比标记
        assert!(table
            .columns
            .iter()
            .enumerate()
            .all(|(i, c)| i == 5 || c.kind != ColumnKind::Percent));
    }

    #[test]
    fn test_demand_input_preserves_labels() {
        let demand = DemandTable {
            months: vec![
                MonthColumn {
                    label: "Jan".to_string(),
                    key: MonthKey::new(2025, 1).unwrap(),
                },
                MonthColumn {
                    label: "2025-02".to_string(),
                    key: MonthKey::new(2025, 2).unwrap(),
                },
            ],
            rows: vec![DemandWideRecord {
                vendor: "V1".to_string(),
                item: "A".to_string(),
                process: "Assembly".to_string(),
                demands: vec![Some(100.0), None],
            }],
        };

        let table = demand_input_table(&demand);
        assert_eq!(table.columns[3].header, "Jan"); // 原始标签回显
        assert_eq!(table.columns[4].header, "2025-02");
        assert_eq!(table.rows[0][4], CellValue::Empty); // 空单元格保持为空
    }

    #[test]
    fn test_vendor_summary_table_missing_capacity() {
        let records = vec![VendorSummaryRecord {
            vendor: "V9".to_string(),
            month: MonthKey::new(2025, 1).unwrap(),
            capacity: None,
            demand: 500.0,
            fulfillment_pct: None,
        }];

        let table = vendor_summary_table("Vendor_Summary", &records);
        assert_eq!(table.rows[0][2], CellValue::Empty);
        assert_eq!(table.rows[0][4], CellValue::Empty);
        assert_eq!(table.columns[4].kind, ColumnKind::Percent);
    }

    #[test]
    fn test_total_summary_table_shape() {
        let records = vec![TotalSummaryRecord {
            month: MonthKey::new(2025, 3).unwrap(),
            capacity: 4200.0,
            demand: 3500.0,
            fulfillment_pct: Some(120.0),
        }];

        let table = total_summary_table(&records);
        let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["Month", "Capacity", "Demand", "Fulfillment_%"]);
        assert_eq!(table.rows[0][0].display_text(), "2025-03");
    }
}
