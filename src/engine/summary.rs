// ==========================================
// 供应商产能平衡分析系统 - 汇总聚合引擎
// ==========================================
// 职责: 连接结果 → 供应商月度汇总 (瓶颈口径) / 总体月度汇总
// 红线: 履约率由聚合值重新计算,禁止对行百分比求平均
// ==========================================

use crate::domain::summary::{
    fulfillment_pct, JoinedRecord, TotalSummaryRecord, VendorSummaryRecord,
};
use crate::domain::types::MonthKey;
use std::collections::HashMap;

pub struct SummaryAggregator;

impl SummaryAggregator {
    /// 创建汇总聚合引擎
    pub fn new() -> Self {
        Self
    }

    /// 供应商月度汇总
    ///
    /// capacity = 当月各工序产能的最小值 (瓶颈工序,缺失产能不参与取最小)
    /// demand   = 当月各工序需求之和
    /// 全部工序产能缺失时 capacity 为 None
    ///
    /// # 返回
    /// 按 (供应商, 月份) 升序
    pub fn vendor_summary(&self, joined: &[JoinedRecord]) -> Vec<VendorSummaryRecord> {
        let mut grouped: HashMap<(String, MonthKey), (Option<f64>, f64)> = HashMap::new();
        for record in joined {
            let entry = grouped
                .entry((record.vendor.clone(), record.month))
                .or_insert((None, 0.0));
            entry.0 = match (entry.0, record.capacity) {
                (Some(current), Some(cap)) => Some(current.min(cap)),
                (None, Some(cap)) => Some(cap),
                (current, None) => current,
            };
            entry.1 += record.demand;
        }

        let mut records: Vec<VendorSummaryRecord> = grouped
            .into_iter()
            .map(|((vendor, month), (capacity, demand))| VendorSummaryRecord {
                vendor,
                month,
                capacity,
                demand,
                fulfillment_pct: fulfillment_pct(capacity, demand),
            })
            .collect();

        records.sort_by(|a, b| (&a.vendor, a.month).cmp(&(&b.vendor, b.month)));
        records
    }

    /// 总体月度汇总
    ///
    /// capacity = 当月所有连接行产能之和 (缺失产能不计入)
    /// demand   = 当月需求之和
    ///
    /// # 返回
    /// 按月份升序 (按日历时间,跨年正确)
    pub fn total_summary(&self, joined: &[JoinedRecord]) -> Vec<TotalSummaryRecord> {
        let mut grouped: HashMap<MonthKey, (f64, f64)> = HashMap::new();
        for record in joined {
            let entry = grouped.entry(record.month).or_insert((0.0, 0.0));
            entry.0 += record.capacity.unwrap_or(0.0);
            entry.1 += record.demand;
        }

        let mut records: Vec<TotalSummaryRecord> = grouped
            .into_iter()
            .map(|(month, (capacity, demand))| TotalSummaryRecord {
                month,
                capacity,
                demand,
                fulfillment_pct: fulfillment_pct(Some(capacity), demand),
            })
            .collect();

        records.sort_by_key(|r| r.month);
        records
    }
}
