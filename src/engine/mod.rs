// ==========================================
// 供应商产能平衡分析系统 - 引擎层
// ==========================================
// 职责: 业务规则引擎,全部为无状态纯函数
// 红线: 数据单向流动: 产能计算 → 需求重塑 → 连接 → 汇总 → 筛选
// ==========================================

pub mod capacity_calc;
pub mod demand_reshape;
pub mod filter;
pub mod join;
pub mod summary;

// 重导出核心引擎
pub use capacity_calc::CapacityCalculator;
pub use demand_reshape::DemandReshaper;
pub use filter::{FilterEngine, MonthKeyed, MonthSelection};
pub use join::CapacityDemandJoiner;
pub use summary::SummaryAggregator;
