// ==========================================
// 供应商产能平衡分析系统 - 导出层
// ==========================================
// 职责: 报表表格构建、工作表命名与 xlsx 工作簿生成
// ==========================================

// 模块声明
pub mod error;
pub mod naming;
pub mod tables;
pub mod workbook_writer;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use workbook_writer::WorkbookWriter;
