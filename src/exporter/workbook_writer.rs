// ==========================================
// 供应商产能平衡分析系统 - 工作簿导出
// ==========================================
// 职责: ReportTable → xlsx 工作簿
// 格式: 表头加粗居中, 列宽按内容自适应, 百分比列按阈值条件着色
// 红线: 着色只认 ColumnKind::Percent; 百分比列中的非数值单元格按原样写出,静默跳过着色
// ==========================================

use crate::domain::table::{CellValue, ColumnKind, ColumnSpec, ReportTable};
use crate::exporter::error::ExportResult;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

// 条件着色 (浅红底/深红字 = 低于阈值, 浅绿底/深绿字 = 达到阈值)
const SHORTAGE_FILL: u32 = 0xFFC7CE;
const SHORTAGE_FONT: u32 = 0x9C0006;
const OK_FILL: u32 = 0xC6EFCE;
const OK_FONT: u32 = 0x006100;

// 列宽范围 (字符)
const MIN_COLUMN_WIDTH: f64 = 8.0;
const MAX_COLUMN_WIDTH: f64 = 40.0;

// ==========================================
// 预构建格式集
// ==========================================
struct ExportFormats {
    header: Format,
    percent_ok: Format,
    percent_shortage: Format,
}

impl ExportFormats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold().set_align(FormatAlign::Center),
            percent_ok: Format::new()
                .set_background_color(OK_FILL)
                .set_font_color(OK_FONT)
                .set_num_format("0.00"),
            percent_shortage: Format::new()
                .set_background_color(SHORTAGE_FILL)
                .set_font_color(SHORTAGE_FONT)
                .set_num_format("0.00"),
        }
    }
}

// ==========================================
// WorkbookWriter - 工作簿导出器
// ==========================================
pub struct WorkbookWriter {
    highlight_threshold_pct: f64, // 低于该阈值的履约率标红
}

impl WorkbookWriter {
    /// 创建工作簿导出器
    ///
    /// # 参数
    /// - `highlight_threshold_pct`: 着色阈值 (通常为 100)
    pub fn new(highlight_threshold_pct: f64) -> Self {
        Self {
            highlight_threshold_pct,
        }
    }

    /// 导出为内存缓冲 (xlsx 字节流)
    pub fn write_to_buffer(&self, tables: &[ReportTable]) -> ExportResult<Vec<u8>> {
        let mut workbook = self.build_workbook(tables)?;
        let buffer = workbook.save_to_buffer()?;
        tracing::info!(sheets = tables.len(), bytes = buffer.len(), "工作簿已生成");
        Ok(buffer)
    }

    /// 导出到文件
    pub fn write_to_file(&self, tables: &[ReportTable], path: &Path) -> ExportResult<()> {
        let mut workbook = self.build_workbook(tables)?;
        workbook.save(path)?;
        tracing::info!(sheets = tables.len(), path = %path.display(), "工作簿已写入");
        Ok(())
    }

    fn build_workbook(&self, tables: &[ReportTable]) -> ExportResult<Workbook> {
        let formats = ExportFormats::new();
        let mut workbook = Workbook::new();

        for table in tables {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&table.name)?;
            self.write_table(worksheet, table, &formats)?;
        }

        Ok(workbook)
    }

    fn write_table(
        &self,
        worksheet: &mut Worksheet,
        table: &ReportTable,
        formats: &ExportFormats,
    ) -> ExportResult<()> {
        // 表头: 加粗居中
        for (col, spec) in table.columns.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, spec.header.as_str(), &formats.header)?;
        }

        // 数据行
        for (row_idx, row) in table.rows.iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            for (col_idx, (cell, spec)) in row.iter().zip(table.columns.iter()).enumerate() {
                self.write_cell(worksheet, excel_row, col_idx as u16, cell, spec.kind, formats)?;
            }
        }

        // 列宽按内容自适应
        for (col_idx, spec) in table.columns.iter().enumerate() {
            let width = column_width(table, col_idx, spec);
            worksheet.set_column_width(col_idx as u16, width)?;
        }

        Ok(())
    }

    fn write_cell(
        &self,
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        cell: &CellValue,
        kind: ColumnKind,
        formats: &ExportFormats,
    ) -> ExportResult<()> {
        match cell {
            CellValue::Empty => {} // 空单元格不写出
            CellValue::Text(text) => {
                // 百分比列中的文本单元格按原样写出,不着色
                worksheet.write(row, col, text.as_str())?;
            }
            CellValue::Month(month) => {
                worksheet.write(row, col, month.to_string())?;
            }
            CellValue::Number(value) => {
                if kind == ColumnKind::Percent {
                    let format = if *value < self.highlight_threshold_pct {
                        &formats.percent_shortage
                    } else {
                        &formats.percent_ok
                    };
                    worksheet.write_with_format(row, col, *value, format)?;
                } else {
                    worksheet.write(row, col, *value)?;
                }
            }
        }
        Ok(())
    }
}

/// 列宽 = max(表头长度, 各单元格文本长度) + 2,夹取到 [8, 40]
fn column_width(table: &ReportTable, col_idx: usize, spec: &ColumnSpec) -> f64 {
    let mut max_len = spec.header.chars().count();
    for row in &table.rows {
        if let Some(cell) = row.get(col_idx) {
            max_len = max_len.max(cell.display_text().chars().count());
        }
    }
    ((max_len + 2) as f64).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}
