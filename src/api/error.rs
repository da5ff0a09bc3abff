// ==========================================
// 供应商产能平衡分析系统 - API 层错误类型
// ==========================================
// 职责: 统一对外错误,转换导入/导出/配置错误为用户可读信息
// ==========================================

use crate::config::ConfigError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 分层错误
    // ==========================================
    #[error("数据导入失败: {0}")]
    ImportError(String),

    #[error("报表导出失败: {0}")]
    ExportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从下层错误转换
// 目的: 将各层技术错误转换为用户可读的业务错误
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Other(e) => ApiError::Other(e),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_conversion() {
        let import_err = ImportError::SheetNotFound("Capacity".to_string());
        let api_err: ApiError = import_err.into();
        match api_err {
            ApiError::ImportError(msg) => {
                assert!(msg.contains("Capacity"));
                assert!(msg.contains("工作表不存在"));
            }
            _ => panic!("Expected ImportError"),
        }
    }

    #[test]
    fn test_column_missing_conversion() {
        let import_err = ImportError::ColumnMissing {
            table: "Demand".to_string(),
            column: "Item".to_string(),
        };
        let api_err: ApiError = import_err.into();
        match api_err {
            ApiError::ImportError(msg) => {
                assert!(msg.contains("Demand"));
                assert!(msg.contains("Item"));
            }
            _ => panic!("Expected ImportError"),
        }
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = ConfigError::InvalidValue("demand_year 超出范围: 99".to_string());
        let api_err: ApiError = config_err.into();
        assert!(matches!(api_err, ApiError::ConfigError(_)));
    }
}
