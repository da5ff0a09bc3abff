// ==========================================
// 供应商产能平衡分析系统 - 命令行入口
// ==========================================
// 用法:
//   supplier-capacity-report <输入工作簿.xlsx> [输出.xlsx] [选项]
//   supplier-capacity-report --capacity cap.csv --demand dem.csv [输出.xlsx] [选项]
// 选项:
//   --months 2025-01,2025-02   仅导出指定月份 (空 = 全部)
//   --band LOW|MEDIUM|HIGH|ALL 供应商汇总履约区间筛选
//   --vendor <名称>|ALL        供应商范围 (影响工作表命名)
//   --config <path>            JSON 配置文件
//   --verbose                  调试日志
// ==========================================

use std::path::PathBuf;
use supplier_capacity_report::api::{ExportSelection, ReportApi};
use supplier_capacity_report::config::ReportConfig;
use supplier_capacity_report::domain::types::{BandFilter, MonthKey, VendorSelection};
use supplier_capacity_report::engine::MonthSelection;
use supplier_capacity_report::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let options = parse_args(&args)?;

    if options.verbose {
        logging::init_with_default("debug");
    } else {
        logging::init();
    }

    tracing::info!("==================================================");
    tracing::info!("{}", supplier_capacity_report::APP_NAME);
    tracing::info!("系统版本: {}", supplier_capacity_report::VERSION);
    tracing::info!("==================================================");

    let config = match &options.config_path {
        Some(path) => ReportConfig::load_from_file(path)?,
        None => ReportConfig::default(),
    };

    let api = ReportApi::new(config);

    // 构建数据集
    let dataset = match (&options.workbook, &options.capacity_csv, &options.demand_csv) {
        (Some(path), None, None) => api.build_from_workbook(path)?,
        (None, Some(cap), Some(dem)) => api.build_from_csv(cap, dem)?,
        _ => {
            print_usage();
            return Err("参数错误: 需要一个输入工作簿,或 --capacity 与 --demand 成对出现".into());
        }
    };

    tracing::info!(
        vendors = api.vendors_available(&dataset).len(),
        months = api.months_available(&dataset).len(),
        "数据集构建完成"
    );

    // 导出
    let selection = ExportSelection {
        vendor: options.vendor,
        months: options.months,
        band: options.band,
    };

    let output = options
        .output
        .unwrap_or_else(|| PathBuf::from(supplier_capacity_report::DEFAULT_OUTPUT_FILE));
    api.export_to_file(&dataset, &selection, &output)?;

    tracing::info!("报表已导出: {}", output.display());
    Ok(())
}

struct CliOptions {
    workbook: Option<PathBuf>,
    capacity_csv: Option<PathBuf>,
    demand_csv: Option<PathBuf>,
    output: Option<PathBuf>,
    months: MonthSelection,
    band: BandFilter,
    vendor: VendorSelection,
    config_path: Option<PathBuf>,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, Box<dyn std::error::Error>> {
    let mut options = CliOptions {
        workbook: None,
        capacity_csv: None,
        demand_csv: None,
        output: None,
        months: MonthSelection::all(),
        band: BandFilter::All,
        vendor: VendorSelection::All,
        config_path: None,
        verbose: false,
    };

    let mut positional: Vec<String> = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--capacity" => {
                let value = iter.next().ok_or("--capacity 缺少参数")?;
                options.capacity_csv = Some(PathBuf::from(value));
            }
            "--demand" => {
                let value = iter.next().ok_or("--demand 缺少参数")?;
                options.demand_csv = Some(PathBuf::from(value));
            }
            "--months" => {
                let value = iter.next().ok_or("--months 缺少参数")?;
                options.months = parse_months(value)?;
            }
            "--band" => {
                let value = iter.next().ok_or("--band 缺少参数")?;
                options.band = BandFilter::from_str(value)
                    .ok_or_else(|| format!("未知履约区间: {}", value))?;
            }
            "--vendor" => {
                let value = iter.next().ok_or("--vendor 缺少参数")?;
                options.vendor = VendorSelection::parse(value);
            }
            "--config" => {
                let value = iter.next().ok_or("--config 缺少参数")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--verbose" => options.verbose = true,
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    if options.capacity_csv.is_none() && options.demand_csv.is_none() {
        options.workbook = positional.next().map(PathBuf::from);
    }
    options.output = positional.next().map(PathBuf::from);

    Ok(options)
}

/// 解析 "--months 2025-01,2025-02" 参数 (仅接受规范键)
fn parse_months(value: &str) -> Result<MonthSelection, Box<dyn std::error::Error>> {
    let mut months = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let key = MonthKey::try_from(part.to_string())?;
        months.push(key);
    }
    Ok(MonthSelection::of(months))
}

fn print_usage() {
    println!(
        "{} v{}",
        supplier_capacity_report::APP_NAME,
        supplier_capacity_report::VERSION
    );
    println!();
    println!("用法:");
    println!("  supplier-capacity-report <输入工作簿.xlsx> [输出.xlsx] [选项]");
    println!("  supplier-capacity-report --capacity cap.csv --demand dem.csv [输出.xlsx] [选项]");
    println!();
    println!("输入工作簿需包含 Capacity 与 Demand 两个工作表");
    println!();
    println!("选项:");
    println!("  --months 2025-01,2025-02   仅导出指定月份 (默认全部)");
    println!("  --band LOW|MEDIUM|HIGH|ALL 供应商汇总履约区间筛选 (默认 ALL)");
    println!("  --vendor <名称>|ALL        供应商范围,影响结果工作表命名 (默认 ALL)");
    println!("  --config <path>            JSON 配置文件");
    println!("  --verbose                  调试日志");
}
