// ==========================================
// 供应商产能平衡分析系统 - 产能需求连接引擎
// ==========================================
// 职责: 长表需求左连接产能,派生履约率与状态
// 红线: 左连接,每条需求行必定存活; 同键多条产能按连接语义展开,不去重
// ==========================================

use crate::domain::capacity::CapacityRecord;
use crate::domain::demand::DemandLongRecord;
use crate::domain::summary::{fulfillment_pct, JoinedRecord};
use crate::domain::types::FulfillmentStatus;
use std::collections::HashMap;

pub struct CapacityDemandJoiner;

impl CapacityDemandJoiner {
    /// 创建连接引擎
    pub fn new() -> Self {
        Self
    }

    /// 左连接需求与产能
    ///
    /// 连接键为 (供应商, 工序); 无匹配产能的需求行 capacity 置 None,
    /// 状态判为 Shortage
    ///
    /// # 参数
    /// - `demands`: 长表需求行
    /// - `capacities`: 产能行 (capacity 已计算)
    ///
    /// # 返回
    /// 连接结果,按 (供应商, 工序, 月份) 升序
    pub fn join(
        &self,
        demands: &[DemandLongRecord],
        capacities: &[CapacityRecord],
    ) -> Vec<JoinedRecord> {
        // (供应商, 工序) → 产能行; 同键多行时每行都参与展开
        let mut capacity_map: HashMap<(&str, &str), Vec<&CapacityRecord>> = HashMap::new();
        for record in capacities {
            capacity_map
                .entry((record.vendor.as_str(), record.process.as_str()))
                .or_default()
                .push(record);
        }

        let mut joined = Vec::with_capacity(demands.len());
        for demand in demands {
            let key = (demand.vendor.as_str(), demand.process.as_str());
            match capacity_map.get(&key) {
                Some(matches) => {
                    for capacity in matches {
                        joined.push(make_record(demand, Some(capacity.capacity)));
                    }
                }
                None => {
                    joined.push(make_record(demand, None));
                }
            }
        }

        joined.sort_by(|a, b| {
            (&a.vendor, &a.process, a.month).cmp(&(&b.vendor, &b.process, b.month))
        });

        joined
    }
}

fn make_record(demand: &DemandLongRecord, capacity: Option<f64>) -> JoinedRecord {
    JoinedRecord {
        vendor: demand.vendor.clone(),
        process: demand.process.clone(),
        month: demand.month,
        demand: demand.demand,
        capacity,
        fulfillment_pct: fulfillment_pct(capacity, demand.demand),
        status: FulfillmentStatus::evaluate(capacity, demand.demand),
    }
}
