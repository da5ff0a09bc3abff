// ==========================================
// 供应商产能平衡分析系统 - 输入读取器
// ==========================================
// 职责: 编排 解析 → 映射,产出领域输入
// 输入形态: 单一工作簿 (Capacity/Demand 工作表) 或 CSV 文件对
// ==========================================

use crate::domain::capacity::CapacityInputRecord;
use crate::domain::demand::DemandTable;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, ExcelParser, RawTable};
use std::path::Path;

/// 工作簿中的产能工作表名
pub const CAPACITY_SHEET: &str = "Capacity";

/// 工作簿中的需求工作表名
pub const DEMAND_SHEET: &str = "Demand";

pub struct InputReader {
    mapper: FieldMapper,
}

impl InputReader {
    /// 创建输入读取器
    ///
    /// # 参数
    /// - `demand_year`: 月份缩写解析使用的固定年份
    pub fn new(demand_year: i32) -> Self {
        Self {
            mapper: FieldMapper::new(demand_year),
        }
    }

    /// 读取单一工作簿 (Capacity / Demand 两个工作表)
    pub fn read_workbook(
        &self,
        path: &Path,
    ) -> ImportResult<(Vec<CapacityInputRecord>, DemandTable)> {
        tracing::info!(path = %path.display(), "读取输入工作簿");
        let parser = ExcelParser;
        let capacity_raw = parser.parse_sheet(path, CAPACITY_SHEET)?;
        let demand_raw = parser.parse_sheet(path, DEMAND_SHEET)?;
        self.map_tables(&capacity_raw, &demand_raw)
    }

    /// 读取 CSV 文件对
    pub fn read_csv_pair(
        &self,
        capacity_path: &Path,
        demand_path: &Path,
    ) -> ImportResult<(Vec<CapacityInputRecord>, DemandTable)> {
        tracing::info!(
            capacity = %capacity_path.display(),
            demand = %demand_path.display(),
            "读取 CSV 输入"
        );
        let parser = CsvParser;
        let capacity_raw = parser.parse(capacity_path)?;
        let demand_raw = parser.parse(demand_path)?;
        self.map_tables(&capacity_raw, &demand_raw)
    }

    /// 映射已解析的原始表
    pub fn map_tables(
        &self,
        capacity: &RawTable,
        demand: &RawTable,
    ) -> ImportResult<(Vec<CapacityInputRecord>, DemandTable)> {
        let capacity_inputs = self.mapper.map_capacity_table(capacity)?;
        let demand_table = self.mapper.map_demand_table(demand)?;
        tracing::info!(
            capacity_rows = capacity_inputs.len(),
            demand_rows = demand_table.rows.len(),
            month_columns = demand_table.months.len(),
            "输入映射完成"
        );
        Ok((capacity_inputs, demand_table))
    }
}
