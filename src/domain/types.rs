// ==========================================
// 供应商产能平衡分析系统 - 领域类型定义
// ==========================================
// 职责: 月份键、履约状态、履约区间等核心值类型
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 月份键 (Month Key)
// ==========================================
// 红线: 排序必须按日历时间,不按字符串
// 内部固定为当月 1 号,显示与序列化均为 "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// 构造月份键
    ///
    /// # 参数
    /// - `year`: 年份
    /// - `month`: 月份 (1-12)
    ///
    /// # 返回
    /// - `Some(MonthKey)`: 合法月份
    /// - `None`: 月份越界
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(MonthKey)
    }

    /// 解析月份列标签
    ///
    /// 支持两种形式:
    /// - 英文三字母缩写 (Jan/Feb/.../Dec,不区分大小写),年份取 `default_year`
    /// - 规范键 "YYYY-MM" 直接通过
    ///
    /// # 返回
    /// - `Some(MonthKey)`: 标签可识别
    /// - `None`: 未知标签 (由导入层上报错误)
    pub fn parse_label(label: &str, default_year: i32) -> Option<Self> {
        let trimmed = label.trim();

        // 含 '-' 的标签只接受规范键形式
        if let Some((y, m)) = trimmed.split_once('-') {
            if y.len() == 4 {
                if let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>()) {
                    return MonthKey::new(year, month);
                }
            }
            return None;
        }

        let month = match trimmed.to_ascii_lowercase().as_str() {
            "jan" => 1,
            "feb" => 2,
            "mar" => 3,
            "apr" => 4,
            "may" => 5,
            "jun" => 6,
            "jul" => 7,
            "aug" => 8,
            "sep" => 9,
            "oct" => 10,
            "nov" => 11,
            "dec" => 12,
            _ => return None,
        };
        MonthKey::new(default_year, month)
    }

    /// 年份
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 月份 (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 当月 1 号日期
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        trimmed
            .split_once('-')
            .and_then(|(y, m)| {
                let year = y.parse::<i32>().ok()?;
                let month = m.parse::<u32>().ok()?;
                MonthKey::new(year, month)
            })
            .ok_or_else(|| format!("非法月份键: {}", value))
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

// ==========================================
// 履约状态 (Fulfillment Status)
// ==========================================
// 判定规则: 产能存在且 产能 >= 需求 时为 Ok,否则为 Shortage
// 红线: 按原始值比较,不按四舍五入后的百分比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    #[serde(rename = "OK")]
    Ok, // 产能满足需求
    #[serde(rename = "Shortage")]
    Shortage, // 产能缺口
}

impl FulfillmentStatus {
    /// 按原始值判定状态
    ///
    /// # 参数
    /// - `capacity`: 产能 (无匹配产能时为 None)
    /// - `demand`: 需求
    pub fn evaluate(capacity: Option<f64>, demand: f64) -> Self {
        match capacity {
            Some(c) if c >= demand => FulfillmentStatus::Ok,
            _ => FulfillmentStatus::Shortage,
        }
    }

    /// 报表展示字符串
    pub fn as_report_str(&self) -> &'static str {
        match self {
            FulfillmentStatus::Ok => "OK",
            FulfillmentStatus::Shortage => "Shortage",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_report_str())
    }
}

// ==========================================
// 履约区间 (Fulfillment Band)
// ==========================================
// 区间划分 (按两位小数的履约率): Low <= 75 < Medium <= 85 < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentBand {
    Low,    // 履约率 <= 75%
    Medium, // 75% < 履约率 <= 85%
    High,   // 履约率 > 85%
}

impl FulfillmentBand {
    /// 按阈值划分履约区间
    ///
    /// # 参数
    /// - `pct`: 履约率 (已四舍五入到两位小数)
    /// - `low_max`: Low 区间上界 (含)
    /// - `medium_max`: Medium 区间上界 (含)
    pub fn classify(pct: f64, low_max: f64, medium_max: f64) -> Self {
        if pct <= low_max {
            FulfillmentBand::Low
        } else if pct <= medium_max {
            FulfillmentBand::Medium
        } else {
            FulfillmentBand::High
        }
    }
}

impl fmt::Display for FulfillmentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentBand::Low => write!(f, "LOW"),
            FulfillmentBand::Medium => write!(f, "MEDIUM"),
            FulfillmentBand::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 履约区间筛选 (Band Filter)
// ==========================================
// All 为恒等筛选; 区间筛选会排除履约率未定义的行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandFilter {
    All,    // 不筛选
    Low,    // 仅 Low 区间
    Medium, // 仅 Medium 区间
    High,   // 仅 High 区间
}

impl BandFilter {
    /// 从字符串解析筛选模式 (不区分大小写)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Some(BandFilter::All),
            "LOW" => Some(BandFilter::Low),
            "MEDIUM" => Some(BandFilter::Medium),
            "HIGH" => Some(BandFilter::High),
            _ => None,
        }
    }

    /// 判断履约区间是否通过筛选
    ///
    /// # 参数
    /// - `band`: 行的履约区间 (履约率未定义时为 None)
    pub fn allows(&self, band: Option<FulfillmentBand>) -> bool {
        match self {
            BandFilter::All => true,
            BandFilter::Low => band == Some(FulfillmentBand::Low),
            BandFilter::Medium => band == Some(FulfillmentBand::Medium),
            BandFilter::High => band == Some(FulfillmentBand::High),
        }
    }
}

impl fmt::Display for BandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandFilter::All => write!(f, "ALL"),
            BandFilter::Low => write!(f, "LOW"),
            BandFilter::Medium => write!(f, "MEDIUM"),
            BandFilter::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 供应商选择 (Vendor Selection)
// ==========================================
// "ALL" 表示全部供应商,其余为单一供应商
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorSelection {
    All,
    One(String),
}

impl VendorSelection {
    /// 从字符串解析 ("ALL" 不区分大小写,空白视为 All)
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("ALL") {
            VendorSelection::All
        } else {
            VendorSelection::One(trimmed.to_string())
        }
    }

    /// 报表命名使用的标签
    pub fn label(&self) -> &str {
        match self {
            VendorSelection::All => "ALL",
            VendorSelection::One(vendor) => vendor,
        }
    }

    /// 是否包含指定供应商
    pub fn includes(&self, vendor: &str) -> bool {
        match self {
            VendorSelection::All => true,
            VendorSelection::One(selected) => selected == vendor,
        }
    }
}
