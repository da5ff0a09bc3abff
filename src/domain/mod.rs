// ==========================================
// 供应商产能平衡分析系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与核心值类型
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod capacity;
pub mod demand;
pub mod summary;
pub mod table;
pub mod types;

// 重导出核心类型
pub use capacity::{CapacityInputRecord, CapacityRecord};
pub use demand::{DemandCell, DemandLongRecord, DemandTable, DemandWideRecord, MonthColumn};
pub use summary::{
    fulfillment_pct, round2, ChartPoint, ChartSeries, JoinedRecord, TotalSummaryRecord,
    VendorSummaryRecord,
};
pub use table::{CellValue, ColumnKind, ColumnSpec, ReportTable};
pub use types::{BandFilter, FulfillmentBand, FulfillmentStatus, MonthKey, VendorSelection};
