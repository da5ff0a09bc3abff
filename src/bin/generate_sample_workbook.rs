// ==========================================
// 供应商产能平衡分析系统 - 示例输入生成器
// ==========================================
// 职责: 生成演示用输入工作簿 (Capacity / Demand 两个工作表)
// 用法: cargo run --bin generate_sample_workbook [输出路径]
// ==========================================

use rust_xlsxwriter::Workbook;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Supplier_Capacity_Input.xlsx".to_string());

    let mut workbook = Workbook::new();

    // Capacity 工作表
    let sheet = workbook.add_worksheet();
    sheet.set_name("Capacity")?;
    let capacity_headers = [
        "Vendor",
        "Process",
        "Lines",
        "HoursPerDay",
        "OutputPerHourPerLine",
        "WorkingDays",
    ];
    for (col, header) in capacity_headers.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }

    let capacity_rows: [(&str, &str, f64, f64, f64, f64); 5] = [
        ("V1", "Assembly", 2.0, 8.0, 10.0, 20.0),
        ("V1", "Painting", 1.0, 8.0, 12.0, 20.0),
        ("V2", "Assembly", 3.0, 8.0, 9.0, 22.0),
        ("V2", "Packing", 2.0, 10.0, 15.0, 22.0),
        ("V3", "Assembly", 1.0, 8.0, 8.0, 18.0),
    ];
    for (idx, (vendor, process, lines, hours, output, days)) in capacity_rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write(row, 0, *vendor)?;
        sheet.write(row, 1, *process)?;
        sheet.write(row, 2, *lines)?;
        sheet.write(row, 3, *hours)?;
        sheet.write(row, 4, *output)?;
        sheet.write(row, 5, *days)?;
    }

    // Demand 工作表 (宽表: 月份为列,含空单元格)
    let sheet = workbook.add_worksheet();
    sheet.set_name("Demand")?;
    let demand_headers = ["Vendor", "Item", "Process", "Jan", "Feb", "Mar", "Apr"];
    for (col, header) in demand_headers.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }

    let demand_rows: [(&str, &str, &str, [Option<f64>; 4]); 6] = [
        ("V1", "ITEM-001", "Assembly", [Some(1500.0), Some(1800.0), Some(2000.0), None]),
        ("V1", "ITEM-002", "Assembly", [Some(1200.0), Some(900.0), None, Some(1100.0)]),
        ("V1", "ITEM-001", "Painting", [Some(800.0), Some(950.0), Some(700.0), Some(600.0)]),
        ("V2", "ITEM-003", "Assembly", [Some(2500.0), Some(2600.0), Some(2400.0), Some(2550.0)]),
        ("V2", "ITEM-004", "Packing", [Some(3000.0), None, Some(3500.0), Some(3300.0)]),
        ("V3", "ITEM-005", "Assembly", [Some(1400.0), Some(1500.0), Some(1350.0), Some(1600.0)]),
    ];
    for (idx, (vendor, item, process, demands)) in demand_rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write(row, 0, *vendor)?;
        sheet.write(row, 1, *item)?;
        sheet.write(row, 2, *process)?;
        for (col, demand) in demands.iter().enumerate() {
            if let Some(value) = demand {
                sheet.write(row, (col + 3) as u16, *value)?;
            }
        }
    }

    workbook.save(&path)?;
    println!("示例输入已生成: {}", path);
    Ok(())
}
