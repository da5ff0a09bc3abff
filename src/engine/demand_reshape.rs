// ==========================================
// 供应商产能平衡分析系统 - 需求重塑引擎
// ==========================================
// 职责: 宽表逆透视 + 跨 Item 聚合
// 红线: 空单元格不产出记录; 聚合结果与输入行顺序无关
// ==========================================

use crate::domain::demand::{DemandCell, DemandLongRecord, DemandTable};
use crate::domain::types::MonthKey;
use std::collections::HashMap;

pub struct DemandReshaper;

impl DemandReshaper {
    /// 创建需求重塑引擎
    pub fn new() -> Self {
        Self
    }

    /// 逆透视: 宽表 → 单元格
    ///
    /// 每个非空单元格产出一条 DemandCell;
    /// 稠密输入下单元格数 = 行数 × 月份列数
    pub fn unpivot(&self, table: &DemandTable) -> Vec<DemandCell> {
        let mut cells = Vec::new();
        for row in &table.rows {
            for (month, demand) in table.months.iter().zip(row.demands.iter()) {
                if let Some(value) = demand {
                    cells.push(DemandCell {
                        vendor: row.vendor.clone(),
                        item: row.item.clone(),
                        process: row.process.clone(),
                        month: month.key,
                        demand: *value,
                    });
                }
            }
        }
        cells
    }

    /// 聚合: 按 (供应商, 工序, 月份) 求和,折叠 Item 维度
    ///
    /// # 返回
    /// 按 (供应商, 工序, 月份) 升序
    pub fn aggregate(&self, cells: Vec<DemandCell>) -> Vec<DemandLongRecord> {
        let mut grouped: HashMap<(String, String, MonthKey), f64> = HashMap::new();
        for cell in cells {
            *grouped
                .entry((cell.vendor, cell.process, cell.month))
                .or_insert(0.0) += cell.demand;
        }

        let mut records: Vec<DemandLongRecord> = grouped
            .into_iter()
            .map(|((vendor, process, month), demand)| DemandLongRecord {
                vendor,
                process,
                month,
                demand,
            })
            .collect();

        records.sort_by(|a, b| {
            (&a.vendor, &a.process, a.month).cmp(&(&b.vendor, &b.process, b.month))
        });

        records
    }

    /// 重塑: 逆透视 + 聚合
    pub fn reshape(&self, table: &DemandTable) -> Vec<DemandLongRecord> {
        let cells = self.unpivot(table);
        tracing::debug!(cells = cells.len(), "需求逆透视完成");
        self.aggregate(cells)
    }
}
