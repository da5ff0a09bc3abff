// ==========================================
// 供应商产能平衡分析系统 - 报表 API
// ==========================================
// 职责: 对外业务接口,一次调用 = 一次完整管线运行
// 流程: 解析 → 映射 → 产能计算 → 需求重塑 → 连接 → 汇总 → 筛选/导出
// 红线: 无跨运行缓存,输入变更即整体重算
// ==========================================

use crate::api::error::ApiResult;
use crate::config::ReportConfig;
use crate::domain::capacity::{CapacityInputRecord, CapacityRecord};
use crate::domain::demand::DemandTable;
use crate::domain::summary::{
    ChartPoint, ChartSeries, JoinedRecord, TotalSummaryRecord, VendorSummaryRecord,
};
use crate::domain::table::ReportTable;
use crate::domain::types::{BandFilter, MonthKey, VendorSelection};
use crate::engine::{
    CapacityCalculator, CapacityDemandJoiner, DemandReshaper, FilterEngine, MonthSelection,
    SummaryAggregator,
};
use crate::exporter::{naming, tables, WorkbookWriter};
use crate::importer::{InputReader, RawTable};
use crate::perf::PerfGuard;
use std::collections::BTreeSet;
use std::path::Path;

// ==========================================
// ReportDataset - 一次运行的全部派生结果
// ==========================================
// 生命周期: 单次运行内有效
#[derive(Debug, Clone)]
pub struct ReportDataset {
    pub capacities: Vec<CapacityRecord>,           // 产能行 (含计算结果)
    pub demand_wide: DemandTable,                  // 宽表需求 (回显用)
    pub joined: Vec<JoinedRecord>,                 // 连接结果
    pub vendor_summary: Vec<VendorSummaryRecord>,  // 供应商月度汇总
    pub total_summary: Vec<TotalSummaryRecord>,    // 总体月度汇总
}

// ==========================================
// ExportSelection - 导出选择
// ==========================================
#[derive(Debug, Clone)]
pub struct ExportSelection {
    pub vendor: VendorSelection, // 供应商范围 (影响工作表命名)
    pub months: MonthSelection,  // 月份集合 (空 = 全部)
    pub band: BandFilter,        // 供应商汇总的履约区间筛选
}

impl Default for ExportSelection {
    fn default() -> Self {
        Self {
            vendor: VendorSelection::All,
            months: MonthSelection::all(),
            band: BandFilter::All,
        }
    }
}

// ==========================================
// ReportApi - 报表业务接口
// ==========================================
pub struct ReportApi {
    config: ReportConfig,
}

impl ReportApi {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    // ==========================================
    // 数据集构建
    // ==========================================

    /// 从单一工作簿构建数据集 (Capacity / Demand 两个工作表)
    pub fn build_from_workbook(&self, path: &Path) -> ApiResult<ReportDataset> {
        let _perf = PerfGuard::new("build_from_workbook");
        let reader = InputReader::new(self.config.demand_year);
        let (capacity_inputs, demand_wide) = reader.read_workbook(path)?;
        Ok(self.run_pipeline(capacity_inputs, demand_wide))
    }

    /// 从 CSV 文件对构建数据集
    pub fn build_from_csv(
        &self,
        capacity_path: &Path,
        demand_path: &Path,
    ) -> ApiResult<ReportDataset> {
        let _perf = PerfGuard::new("build_from_csv");
        let reader = InputReader::new(self.config.demand_year);
        let (capacity_inputs, demand_wide) = reader.read_csv_pair(capacity_path, demand_path)?;
        Ok(self.run_pipeline(capacity_inputs, demand_wide))
    }

    /// 从已解析的原始表构建数据集
    pub fn build_from_tables(
        &self,
        capacity: &RawTable,
        demand: &RawTable,
    ) -> ApiResult<ReportDataset> {
        let reader = InputReader::new(self.config.demand_year);
        let (capacity_inputs, demand_wide) = reader.map_tables(capacity, demand)?;
        Ok(self.run_pipeline(capacity_inputs, demand_wide))
    }

    fn run_pipeline(
        &self,
        capacity_inputs: Vec<CapacityInputRecord>,
        demand_wide: DemandTable,
    ) -> ReportDataset {
        let _perf = PerfGuard::new("run_pipeline");

        let capacities = CapacityCalculator::new().compute(&capacity_inputs);
        let demand_long = DemandReshaper::new().reshape(&demand_wide);
        let joined = CapacityDemandJoiner::new().join(&demand_long, &capacities);
        let aggregator = SummaryAggregator::new();
        let vendor_summary = aggregator.vendor_summary(&joined);
        let total_summary = aggregator.total_summary(&joined);

        tracing::info!(
            capacities = capacities.len(),
            demand_rows = demand_long.len(),
            joined = joined.len(),
            vendor_summary = vendor_summary.len(),
            total_summary = total_summary.len(),
            "管线运行完成"
        );

        ReportDataset {
            capacities,
            demand_wide,
            joined,
            vendor_summary,
            total_summary,
        }
    }

    // ==========================================
    // 查询视图 (纯函数,不改动数据集)
    // ==========================================

    /// 可选月份列表 (按日历时间升序去重)
    pub fn months_available(&self, dataset: &ReportDataset) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = dataset.joined.iter().map(|r| r.month).collect();
        months.into_iter().collect()
    }

    /// 可选供应商列表 (升序去重)
    pub fn vendors_available(&self, dataset: &ReportDataset) -> Vec<String> {
        let vendors: BTreeSet<String> = dataset
            .vendor_summary
            .iter()
            .map(|r| r.vendor.clone())
            .collect();
        vendors.into_iter().collect()
    }

    /// 供应商汇总视图 (月份 + 履约区间筛选)
    pub fn vendor_summary_view(
        &self,
        dataset: &ReportDataset,
        months: &MonthSelection,
        band: BandFilter,
    ) -> Vec<VendorSummaryRecord> {
        let engine = self.filter_engine();
        let by_month = engine.filter_months(&dataset.vendor_summary, months);
        engine.filter_band(&by_month, band)
    }

    /// 总体汇总视图 (月份筛选)
    pub fn total_summary_view(
        &self,
        dataset: &ReportDataset,
        months: &MonthSelection,
    ) -> Vec<TotalSummaryRecord> {
        self.filter_engine()
            .filter_months(&dataset.total_summary, months)
    }

    /// 图表数据 (Demand vs Capacity)
    ///
    /// - 全部供应商: 基于总体汇总
    /// - 单一供应商: 基于该供应商的汇总,产能缺失的月份不产出产能点
    ///
    /// 输出顺序: 先需求序列,再产能序列,各自按月份升序
    pub fn chart_series(
        &self,
        dataset: &ReportDataset,
        vendor: &VendorSelection,
        months: &MonthSelection,
    ) -> Vec<ChartPoint> {
        match vendor {
            VendorSelection::All => {
                let rows = self.total_summary_view(dataset, months);
                let mut points = Vec::with_capacity(rows.len() * 2);
                for row in &rows {
                    points.push(ChartPoint {
                        month: row.month,
                        series: ChartSeries::Demand,
                        value: row.demand,
                    });
                }
                for row in &rows {
                    points.push(ChartPoint {
                        month: row.month,
                        series: ChartSeries::Capacity,
                        value: row.capacity,
                    });
                }
                points
            }
            VendorSelection::One(name) => {
                let rows: Vec<VendorSummaryRecord> = self
                    .filter_engine()
                    .filter_months(&dataset.vendor_summary, months)
                    .into_iter()
                    .filter(|r| r.vendor == *name)
                    .collect();
                let mut points = Vec::with_capacity(rows.len() * 2);
                for row in &rows {
                    points.push(ChartPoint {
                        month: row.month,
                        series: ChartSeries::Demand,
                        value: row.demand,
                    });
                }
                for row in &rows {
                    if let Some(capacity) = row.capacity {
                        points.push(ChartPoint {
                            month: row.month,
                            series: ChartSeries::Capacity,
                            value: capacity,
                        });
                    }
                }
                points
            }
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出为内存缓冲 (xlsx 字节流)
    pub fn export_to_buffer(
        &self,
        dataset: &ReportDataset,
        selection: &ExportSelection,
    ) -> ApiResult<Vec<u8>> {
        let _perf = PerfGuard::new("export_to_buffer");
        let tables = self.build_export_tables(dataset, selection);
        let writer = WorkbookWriter::new(self.config.highlight_threshold_pct);
        Ok(writer.write_to_buffer(&tables)?)
    }

    /// 导出到文件
    pub fn export_to_file(
        &self,
        dataset: &ReportDataset,
        selection: &ExportSelection,
        path: &Path,
    ) -> ApiResult<()> {
        let _perf = PerfGuard::new("export_to_file");
        let tables = self.build_export_tables(dataset, selection);
        let writer = WorkbookWriter::new(self.config.highlight_threshold_pct);
        writer.write_to_file(&tables, path)?;
        Ok(())
    }

    /// 组装五张导出表
    ///
    /// - Capacity_Input / Demand_Input: 原始输入回显,不受筛选影响
    /// - 连接结果: 按供应商选择取子集,不做月份筛选
    /// - 供应商汇总: 月份 + 区间筛选后再按供应商选择取子集
    /// - 总体汇总: 月份筛选
    fn build_export_tables(
        &self,
        dataset: &ReportDataset,
        selection: &ExportSelection,
    ) -> Vec<ReportTable> {
        let joined_scoped: Vec<JoinedRecord> = dataset
            .joined
            .iter()
            .filter(|r| selection.vendor.includes(&r.vendor))
            .cloned()
            .collect();

        let vendor_rows: Vec<VendorSummaryRecord> = self
            .vendor_summary_view(dataset, &selection.months, selection.band)
            .into_iter()
            .filter(|r| selection.vendor.includes(&r.vendor))
            .collect();

        let total_rows = self.total_summary_view(dataset, &selection.months);

        vec![
            tables::capacity_input_table(&dataset.capacities),
            tables::demand_input_table(&dataset.demand_wide),
            tables::process_result_table(
                &naming::process_sheet_name(&selection.vendor),
                &joined_scoped,
            ),
            tables::vendor_summary_table(
                &naming::vendor_summary_sheet_name(&selection.vendor),
                &vendor_rows,
            ),
            tables::total_summary_table(&total_rows),
        ]
    }

    fn filter_engine(&self) -> FilterEngine {
        FilterEngine::new(self.config.band_low_max_pct, self.config.band_medium_max_pct)
    }
}
