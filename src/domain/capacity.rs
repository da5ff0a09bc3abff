// ==========================================
// 供应商产能平衡分析系统 - 产能领域模型
// ==========================================
// 职责: 产能输入行与计算后的产能行
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CapacityInputRecord - 产能输入行
// ==========================================
// 四个产能因子全部必填,缺失在导入层即报错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityInputRecord {
    pub vendor: String,                // 供应商
    pub process: String,               // 工序
    pub lines: f64,                    // 产线数
    pub hours_per_day: f64,            // 每日工时
    pub output_per_hour_per_line: f64, // 单线每小时产出
    pub working_days: f64,             // 月工作天数
}

// ==========================================
// CapacityRecord - 产能行 (含计算结果)
// ==========================================
// 不变式: capacity = lines * hours_per_day * output_per_hour_per_line * working_days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRecord {
    pub vendor: String,                // 供应商
    pub process: String,               // 工序
    pub lines: f64,                    // 产线数
    pub hours_per_day: f64,            // 每日工时
    pub output_per_hour_per_line: f64, // 单线每小时产出
    pub working_days: f64,             // 月工作天数
    pub capacity: f64,                 // 月产能 = 四因子乘积,不做舍入
}
