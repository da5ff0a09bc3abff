// ==========================================
// 供应商产能平衡分析系统 - 产能计算引擎
// ==========================================
// 职责: 四因子乘积计算月产能
// 红线: 无状态纯函数,不舍入,不改变输入顺序
// ==========================================

use crate::domain::capacity::{CapacityInputRecord, CapacityRecord};

pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 创建产能计算引擎
    pub fn new() -> Self {
        Self
    }

    /// 计算产能
    ///
    /// capacity = lines * hours_per_day * output_per_hour_per_line * working_days
    /// 负值不校验,按原样参与计算
    ///
    /// # 参数
    /// - `inputs`: 产能输入行
    ///
    /// # 返回
    /// 含产能的记录,顺序与输入一致
    pub fn compute(&self, inputs: &[CapacityInputRecord]) -> Vec<CapacityRecord> {
        inputs
            .iter()
            .map(|input| CapacityRecord {
                vendor: input.vendor.clone(),
                process: input.process.clone(),
                lines: input.lines,
                hours_per_day: input.hours_per_day,
                output_per_hour_per_line: input.output_per_hour_per_line,
                working_days: input.working_days,
                capacity: input.lines
                    * input.hours_per_day
                    * input.output_per_hour_per_line
                    * input.working_days,
            })
            .collect()
    }
}
