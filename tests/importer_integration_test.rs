// ==========================================
// 供应商产能平衡分析系统 - 输入导入集成测试
// ==========================================
// 职责: 验证工作簿 / CSV 解析、字段映射与月份列发现
// ==========================================


use rust_xlsxwriter::Workbook;
use supplier_capacity_report::domain::MonthKey;
use supplier_capacity_report::importer::{ImportError, InputReader};

const DEMAND_YEAR: i32 = 2025;

/// 写入标准 Capacity 表头,再按需覆盖数据行
fn write_capacity_headers(sheet: &mut rust_xlsxwriter::Worksheet) {
    let headers = [
        "Vendor",
        "Process",
        "Lines",
        "HoursPerDay",
        "OutputPerHourPerLine",
        "WorkingDays",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write(0, col as u16, *header).expect("写入表头失败");
    }
}

fn write_demand_headers(sheet: &mut rust_xlsxwriter::Worksheet) {
    for (col, header) in ["Vendor", "Item", "Process", "Jan"].iter().enumerate() {
        sheet.write(0, col as u16, *header).expect("写入表头失败");
    }
}

fn save_workbook(workbook: &mut Workbook) -> tempfile::NamedTempFile {
    let temp_file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("创建临时文件失败");
    workbook.save(temp_file.path()).expect("保存工作簿失败");
    temp_file
}

// ==========================================
// 工作簿读取
// ==========================================

#[test]
fn test_read_workbook_happy_path() {
    let workbook = test_helpers::create_input_workbook(
        &[
            ("V1", "Assembly", 2.0, 8.0, 10.0, 20.0),
            ("V2", "Packing", 1.0, 10.0, 15.0, 22.0),
        ],
        &["Jan", "Feb", "2025-03"],
        &[
            ("V1", "A", "Assembly", vec![Some(3000.0), Some(0.0), None]),
            ("V2", "B", "Packing", vec![Some(900.0), None, Some(50.0)]),
        ],
    )
    .expect("创建测试工作簿失败");

    let reader = InputReader::new(DEMAND_YEAR);
    let (capacities, demand) = reader
        .read_workbook(workbook.path())
        .expect("读取工作簿失败");

    // 产能输入行
    assert_eq!(capacities.len(), 2);
    assert_eq!(capacities[0].vendor, "V1");
    assert_eq!(capacities[0].process, "Assembly");
    assert_eq!(capacities[0].lines, 2.0);
    assert_eq!(capacities[0].working_days, 20.0);
    assert_eq!(capacities[1].output_per_hour_per_line, 15.0);

    // 月份列: 原始表头保留, 键归一化到 YYYY-MM
    let labels: Vec<&str> = demand.months.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan", "Feb", "2025-03"]);
    let keys: Vec<MonthKey> = demand.months.iter().map(|m| m.key).collect();
    assert_eq!(
        keys,
        vec![
            MonthKey::new(2025, 1).expect("非法月份"),
            MonthKey::new(2025, 2).expect("非法月份"),
            MonthKey::new(2025, 3).expect("非法月份"),
        ]
    );

    // 需求单元格: 显式 0 保留, 留空为 None
    assert_eq!(demand.rows.len(), 2);
    assert_eq!(demand.rows[0].demands, vec![Some(3000.0), Some(0.0), None]);
    assert_eq!(demand.rows[1].demands, vec![Some(900.0), None, Some(50.0)]);
}

#[test]
fn test_read_workbook_missing_demand_sheet() {
    // 只有 Capacity 工作表
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Capacity").expect("设置工作表名失败");
    write_capacity_headers(sheet);
    let temp_file = save_workbook(&mut workbook);

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(temp_file.path()) {
        Err(ImportError::SheetNotFound(name)) => assert_eq!(name, "Demand"),
        other => panic!("预期 SheetNotFound, 实际: {:?}", other),
    }
}

#[test]
fn test_read_workbook_missing_required_column() {
    // Capacity 表缺少 WorkingDays 列
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Capacity").expect("设置工作表名失败");
    for (col, header) in ["Vendor", "Process", "Lines", "HoursPerDay", "OutputPerHourPerLine"]
        .iter()
        .enumerate()
    {
        sheet.write(0, col as u16, *header).expect("写入表头失败");
    }
    let sheet = workbook.add_worksheet();
    sheet.set_name("Demand").expect("设置工作表名失败");
    write_demand_headers(sheet);
    let temp_file = save_workbook(&mut workbook);

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(temp_file.path()) {
        Err(ImportError::ColumnMissing { table, column }) => {
            assert_eq!(table, "Capacity");
            assert_eq!(column, "WorkingDays");
        }
        other => panic!("预期 ColumnMissing, 实际: {:?}", other),
    }
}

#[test]
fn test_read_workbook_unknown_month_label() {
    let workbook = test_helpers::create_input_workbook(
        &[("V1", "Assembly", 2.0, 8.0, 10.0, 20.0)],
        &["Jan", "Janu"],
        &[("V1", "A", "Assembly", vec![Some(100.0), Some(200.0)])],
    )
    .expect("创建测试工作簿失败");

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(workbook.path()) {
        Err(ImportError::MonthColumnError { table, label }) => {
            assert_eq!(table, "Demand");
            assert_eq!(label, "Janu");
        }
        other => panic!("预期 MonthColumnError, 实际: {:?}", other),
    }
}

#[test]
fn test_read_workbook_empty_capacity_factor() {
    // Lines 单元格留空 (数据行号从 2 起算)
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Capacity").expect("设置工作表名失败");
    write_capacity_headers(sheet);
    sheet.write(1, 0, "V1").expect("写入失败");
    sheet.write(1, 1, "Assembly").expect("写入失败");
    sheet.write(1, 3, 8.0).expect("写入失败");
    sheet.write(1, 4, 10.0).expect("写入失败");
    sheet.write(1, 5, 20.0).expect("写入失败");
    let sheet = workbook.add_worksheet();
    sheet.set_name("Demand").expect("设置工作表名失败");
    write_demand_headers(sheet);
    let temp_file = save_workbook(&mut workbook);

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(temp_file.path()) {
        Err(ImportError::FieldMappingError { row, message }) => {
            assert_eq!(row, 2);
            assert!(message.contains("Lines"), "错误信息应该指明字段: {}", message);
        }
        other => panic!("预期 FieldMappingError, 实际: {:?}", other),
    }
}

#[test]
fn test_read_workbook_non_numeric_factor() {
    // Lines 单元格为文本
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Capacity").expect("设置工作表名失败");
    write_capacity_headers(sheet);
    sheet.write(1, 0, "V1").expect("写入失败");
    sheet.write(1, 1, "Assembly").expect("写入失败");
    sheet.write(1, 2, "abc").expect("写入失败");
    sheet.write(1, 3, 8.0).expect("写入失败");
    sheet.write(1, 4, 10.0).expect("写入失败");
    sheet.write(1, 5, 20.0).expect("写入失败");
    let sheet = workbook.add_worksheet();
    sheet.set_name("Demand").expect("设置工作表名失败");
    write_demand_headers(sheet);
    let temp_file = save_workbook(&mut workbook);

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(temp_file.path()) {
        Err(ImportError::TypeConversionError { row, field, message }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "Lines");
            assert!(message.contains("abc"), "错误信息应该带上原始值: {}", message);
        }
        other => panic!("预期 TypeConversionError, 实际: {:?}", other),
    }
}

#[test]
fn test_read_workbook_file_not_found() {
    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_workbook(std::path::Path::new("/nonexistent/input.xlsx")) {
        Err(ImportError::FileNotFound(path)) => assert!(path.contains("input.xlsx")),
        other => panic!("预期 FileNotFound, 实际: {:?}", other),
    }
}

// ==========================================
// CSV 读取
// ==========================================

#[test]
fn test_read_csv_pair_happy_path() {
    let capacity_csv = test_helpers::create_csv_file(
        "Vendor,Process,Lines,HoursPerDay,OutputPerHourPerLine,WorkingDays\n\
         V1,Assembly,2,8,10,20\n\
         V2,Packing,1,10,15,22\n",
    )
    .expect("创建产能 CSV 失败");
    let demand_csv = test_helpers::create_csv_file(
        "Vendor,Item,Process,Jan,Feb\n\
         V1,A,Assembly,3000,1000\n\
         V2,B,Packing,900,\n",
    )
    .expect("创建需求 CSV 失败");

    let reader = InputReader::new(DEMAND_YEAR);
    let (capacities, demand) = reader
        .read_csv_pair(capacity_csv.path(), demand_csv.path())
        .expect("读取 CSV 失败");

    assert_eq!(capacities.len(), 2);
    assert_eq!(capacities[1].vendor, "V2");
    assert_eq!(capacities[1].hours_per_day, 10.0);

    assert_eq!(demand.months.len(), 2);
    assert_eq!(
        demand.months[0].key,
        MonthKey::new(2025, 1).expect("非法月份")
    );
    assert_eq!(demand.rows[0].demands, vec![Some(3000.0), Some(1000.0)]);
    // CSV 尾部空字段视为留空
    assert_eq!(demand.rows[1].demands, vec![Some(900.0), None]);
}

#[test]
fn test_read_csv_rejects_unsupported_extension() {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("创建临时文件失败");
    std::fs::write(file.path(), "Vendor,Process\n").expect("写入失败");
    let demand_csv = test_helpers::create_csv_file("Vendor,Item,Process,Jan\nV1,A,Assembly,100\n")
        .expect("创建需求 CSV 失败");

    let reader = InputReader::new(DEMAND_YEAR);
    match reader.read_csv_pair(file.path(), demand_csv.path()) {
        Err(ImportError::UnsupportedFormat(_)) => {}
        other => panic!("预期 UnsupportedFormat, 实际: {:?}", other),
    }
}
