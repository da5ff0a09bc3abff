// ==========================================
// 供应商产能平衡分析系统 - 工作表命名
// ==========================================
// 职责: 供应商选择 → 工作表名
// 红线: 纯字符串函数,与聚合逻辑解耦,可独立测试
// ==========================================

use crate::domain::types::VendorSelection;

/// Excel 工作表名长度上限
const SHEET_NAME_MAX_LEN: usize = 31;

/// 连接结果工作表名
///
/// - 全部供应商: "Process_Result"
/// - 单一供应商: "<Vendor>_Process"
pub fn process_sheet_name(selection: &VendorSelection) -> String {
    match selection {
        VendorSelection::All => "Process_Result".to_string(),
        VendorSelection::One(vendor) => sanitize_sheet_name(&format!("{}_Process", vendor)),
    }
}

/// 供应商汇总工作表名
///
/// - 全部供应商: "Vendor_Summary"
/// - 单一供应商: "<Vendor>_Summary"
pub fn vendor_summary_sheet_name(selection: &VendorSelection) -> String {
    match selection {
        VendorSelection::All => "Vendor_Summary".to_string(),
        VendorSelection::One(vendor) => sanitize_sheet_name(&format!("{}_Summary", vendor)),
    }
}

/// 清理工作表名
///
/// Excel 约束: 不允许 [ ] : * ? / \ ,长度不超过 31 字符
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            _ => c,
        })
        .collect();
    cleaned.chars().take(SHEET_NAME_MAX_LEN).collect()
}
