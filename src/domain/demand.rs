// ==========================================
// 供应商产能平衡分析系统 - 需求领域模型
// ==========================================
// 职责: 宽表需求、逆透视单元格与长表需求行
// ==========================================

use crate::domain::types::MonthKey;
use serde::{Deserialize, Serialize};

// ==========================================
// MonthColumn - 月份列
// ==========================================
// label 保留输入原始写法 (用于回显),key 为规范月份键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthColumn {
    pub label: String, // 原始列标签 (如 "Jan")
    pub key: MonthKey, // 规范月份键 (如 2025-01)
}

// ==========================================
// DemandWideRecord - 宽表需求行
// ==========================================
// demands 与 DemandTable.months 按下标对齐; None 表示单元格为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandWideRecord {
    pub vendor: String,            // 供应商
    pub item: String,              // 物料
    pub process: String,           // 工序
    pub demands: Vec<Option<f64>>, // 月度需求,与月份列对齐
}

// ==========================================
// DemandTable - 宽表需求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandTable {
    pub months: Vec<MonthColumn>,    // 月份列 (按输入顺序)
    pub rows: Vec<DemandWideRecord>, // 需求行
}

// ==========================================
// DemandCell - 逆透视单元格
// ==========================================
// 一个非空宽表单元格对应一条,仍保留 Item 维度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandCell {
    pub vendor: String,  // 供应商
    pub item: String,    // 物料
    pub process: String, // 工序
    pub month: MonthKey, // 月份
    pub demand: f64,     // 需求量
}

// ==========================================
// DemandLongRecord - 长表需求行
// ==========================================
// 已跨 Item 聚合,键为 (供应商, 工序, 月份)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandLongRecord {
    pub vendor: String,  // 供应商
    pub process: String, // 工序
    pub month: MonthKey, // 月份
    pub demand: f64,     // 聚合需求量
}
