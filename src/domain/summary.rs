// ==========================================
// 供应商产能平衡分析系统 - 对账与汇总领域模型
// ==========================================
// 职责: 连接结果行、供应商/总体汇总行、图表数据点
// ==========================================

use crate::domain::types::{FulfillmentStatus, MonthKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 四舍五入到两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 计算履约率 (百分比,两位小数)
///
/// # 参数
/// - `capacity`: 产能 (无匹配产能时为 None)
/// - `demand`: 需求
///
/// # 返回
/// - `Some(pct)`: 履约率
/// - `None`: 产能缺失或需求为零,无法计算
pub fn fulfillment_pct(capacity: Option<f64>, demand: f64) -> Option<f64> {
    let capacity = capacity?;
    if demand == 0.0 {
        return None;
    }
    Some(round2(capacity / demand * 100.0))
}

// ==========================================
// JoinedRecord - 连接结果行
// ==========================================
// 左连接语义: 每条需求行必定存活,无匹配产能时 capacity 为 None
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub vendor: String,               // 供应商
    pub process: String,              // 工序
    pub month: MonthKey,              // 月份
    pub demand: f64,                  // 需求量
    pub capacity: Option<f64>,        // 产能,无匹配时为 None
    pub fulfillment_pct: Option<f64>, // 履约率,无法计算时为 None
    pub status: FulfillmentStatus,    // 按原始值判定
}

// ==========================================
// VendorSummaryRecord - 供应商月度汇总
// ==========================================
// capacity 取该供应商当月各工序产能的最小值 (瓶颈工序)
// 红线: 履约率由聚合值重新计算,不做行百分比平均
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummaryRecord {
    pub vendor: String,               // 供应商
    pub month: MonthKey,              // 月份
    pub capacity: Option<f64>,        // 瓶颈产能,全部工序缺产能时为 None
    pub demand: f64,                  // 需求合计
    pub fulfillment_pct: Option<f64>, // 履约率
}

// ==========================================
// TotalSummaryRecord - 总体月度汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalSummaryRecord {
    pub month: MonthKey,              // 月份
    pub capacity: f64,                // 产能合计 (缺失产能不计入)
    pub demand: f64,                  // 需求合计
    pub fulfillment_pct: Option<f64>, // 履约率
}

// ==========================================
// 图表数据 (Demand vs Capacity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSeries {
    #[serde(rename = "Demand")]
    Demand, // 需求序列
    #[serde(rename = "Capacity")]
    Capacity, // 产能序列
}

impl fmt::Display for ChartSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartSeries::Demand => write!(f, "Demand"),
            ChartSeries::Capacity => write!(f, "Capacity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: MonthKey,     // 月份
    pub series: ChartSeries, // 序列
    pub value: f64,          // 数值
}
