// ==========================================
// 供应商产能平衡分析系统 - 报表配置
// ==========================================
// 职责: 运行参数的默认值与 JSON 文件覆盖
// 覆盖规则: 文件中未出现的字段保持默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败: {0}")]
    ReadError(String),

    #[error("配置解析失败: {0}")]
    ParseError(String),

    #[error("配置值非法: {0}")]
    InvalidValue(String),
}

/// 报表配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 月份缩写解析使用的固定年份
    pub demand_year: i32,

    /// Low 履约区间上界 (含,百分比)
    pub band_low_max_pct: f64,

    /// Medium 履约区间上界 (含,百分比)
    pub band_medium_max_pct: f64,

    /// 导出着色阈值 (低于该值标红,百分比)
    pub highlight_threshold_pct: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            demand_year: 2025,
            band_low_max_pct: 75.0,
            band_medium_max_pct: 85.0,
            highlight_threshold_pct: 100.0,
        }
    }
}

impl ReportConfig {
    /// 从 JSON 文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config: ReportConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.band_low_max_pct >= self.band_medium_max_pct {
            return Err(ConfigError::InvalidValue(format!(
                "band_low_max_pct ({}) 必须小于 band_medium_max_pct ({})",
                self.band_low_max_pct, self.band_medium_max_pct
            )));
        }
        if self.demand_year < 1900 || self.demand_year > 9999 {
            return Err(ConfigError::InvalidValue(format!(
                "demand_year 超出范围: {}",
                self.demand_year
            )));
        }
        Ok(())
    }
}
