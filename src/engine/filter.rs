// ==========================================
// 供应商产能平衡分析系统 - 筛选引擎
// ==========================================
// 职责: 月份集合筛选 + 履约区间筛选
// 红线: 筛选产生新视图,不改动底层聚合结果
// ==========================================

use crate::domain::summary::{JoinedRecord, TotalSummaryRecord, VendorSummaryRecord};
use crate::domain::types::{BandFilter, FulfillmentBand, MonthKey};
use std::collections::BTreeSet;

// ==========================================
// MonthSelection - 月份选择
// ==========================================
// 空集合按"不筛选"处理 (全部通过)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthSelection {
    months: BTreeSet<MonthKey>,
}

impl MonthSelection {
    /// 全部月份 (不筛选)
    pub fn all() -> Self {
        Self::default()
    }

    /// 指定月份集合
    pub fn of(months: impl IntoIterator<Item = MonthKey>) -> Self {
        Self {
            months: months.into_iter().collect(),
        }
    }

    /// 是否为空选择 (即不筛选)
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// 判断月份是否通过筛选
    pub fn allows(&self, month: MonthKey) -> bool {
        self.months.is_empty() || self.months.contains(&month)
    }
}

/// 带月份键的记录 (月份筛选的统一入口)
pub trait MonthKeyed {
    fn month_key(&self) -> MonthKey;
}

impl MonthKeyed for JoinedRecord {
    fn month_key(&self) -> MonthKey {
        self.month
    }
}

impl MonthKeyed for VendorSummaryRecord {
    fn month_key(&self) -> MonthKey {
        self.month
    }
}

impl MonthKeyed for TotalSummaryRecord {
    fn month_key(&self) -> MonthKey {
        self.month
    }
}

// ==========================================
// FilterEngine - 筛选引擎
// ==========================================
pub struct FilterEngine {
    band_low_max_pct: f64,    // Low 区间上界 (含)
    band_medium_max_pct: f64, // Medium 区间上界 (含)
}

impl FilterEngine {
    /// 创建筛选引擎
    ///
    /// # 参数
    /// - `band_low_max_pct`: Low 区间上界
    /// - `band_medium_max_pct`: Medium 区间上界
    pub fn new(band_low_max_pct: f64, band_medium_max_pct: f64) -> Self {
        Self {
            band_low_max_pct,
            band_medium_max_pct,
        }
    }

    /// 月份筛选 (产生新 Vec,不改动输入)
    pub fn filter_months<T: MonthKeyed + Clone>(
        &self,
        records: &[T],
        selection: &MonthSelection,
    ) -> Vec<T> {
        records
            .iter()
            .filter(|r| selection.allows(r.month_key()))
            .cloned()
            .collect()
    }

    /// 履约区间划分
    ///
    /// # 返回
    /// - `Some(band)`: 行的履约区间
    /// - `None`: 履约率未定义,不属于任何区间
    pub fn classify(&self, fulfillment_pct: Option<f64>) -> Option<FulfillmentBand> {
        fulfillment_pct.map(|pct| {
            FulfillmentBand::classify(pct, self.band_low_max_pct, self.band_medium_max_pct)
        })
    }

    /// 履约区间筛选 (作用于供应商汇总)
    ///
    /// 区间筛选会排除履约率未定义的行; All 保留全部
    pub fn filter_band(
        &self,
        records: &[VendorSummaryRecord],
        filter: BandFilter,
    ) -> Vec<VendorSummaryRecord> {
        records
            .iter()
            .filter(|r| filter.allows(self.classify(r.fulfillment_pct)))
            .cloned()
            .collect()
    }
}
