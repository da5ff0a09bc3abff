// ==========================================
// 供应商产能平衡分析系统 - 导入层
// ==========================================
// 职责: 外部文件 → 领域输入,表结构校验在此完成
// 支持: Excel 工作簿 / CSV 文件对
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod input_reader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, RawTable};
pub use input_reader::{InputReader, CAPACITY_SHEET, DEMAND_SHEET};
