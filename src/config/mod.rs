// ==========================================
// 供应商产能平衡分析系统 - 配置层
// ==========================================
// 职责: 运行参数管理,默认值 + JSON 文件覆盖
// ==========================================

pub mod report_config;

// 重导出核心配置
pub use report_config::{ConfigError, ReportConfig};
