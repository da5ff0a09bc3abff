// ==========================================
// 供应商产能平衡分析系统 - 核心库
// ==========================================
// 职责: 供应商月度产能与需求对账,输出汇总报表与标注工作簿
// 流程: 导入 → 产能计算 → 需求重塑 → 连接 → 汇总 → 筛选 → 导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 导出层 - 工作簿生成
pub mod exporter;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BandFilter, FulfillmentBand, FulfillmentStatus, MonthKey, VendorSelection};

// 领域实体
pub use domain::{
    CapacityInputRecord, CapacityRecord, ChartPoint, ChartSeries, DemandLongRecord, DemandTable,
    JoinedRecord, TotalSummaryRecord, VendorSummaryRecord,
};

// 引擎
pub use engine::{
    CapacityCalculator, CapacityDemandJoiner, DemandReshaper, FilterEngine, MonthSelection,
    SummaryAggregator,
};

// API
pub use api::{ApiError, ApiResult, ExportSelection, ReportApi, ReportDataset};

// 配置
pub use config::ReportConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商产能平衡分析系统";

// 默认导出文件名
pub const DEFAULT_OUTPUT_FILE: &str = "Supplier_Capacity_Result.xlsx";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
