//! Statement template workbooks.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

use crate::catalog::templates::{row_fill, HEADER_FILL};
use crate::catalog::TemplateSpec;
use crate::error::Result;
use crate::models::TemplateRecord;

const FONT_SIZE: f64 = 11.0;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(FONT_SIZE)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn cell_format(fill: u32, bold: bool) -> Format {
    let format = Format::new()
        .set_font_size(FONT_SIZE)
        .set_background_color(Color::RGB(fill))
        .set_border(FormatBorder::Thin);
    if bold {
        format.set_bold()
    } else {
        format
    }
}

fn write_text(sheet: &mut Worksheet, row: u32, col: u16, text: &str, format: &Format) -> Result<()> {
    if text.is_empty() {
        sheet.write_blank(row, col, format)?;
    } else {
        sheet.write_string_with_format(row, col, text, format)?;
    }
    Ok(())
}

fn write_record(sheet: &mut Worksheet, row: u32, record: &TemplateRecord, position: usize) -> Result<()> {
    let fill = row_fill(position);
    let plain = cell_format(fill, false);
    let label = cell_format(fill, record.kind.is_bold());

    sheet.write_number_with_format(row, 0, record.row_index as f64, &plain)?;
    write_text(sheet, row, 1, &record.item, &label)?;
    write_text(sheet, row, 2, &record.summary, &label)?;
    write_text(sheet, row, 3, &record.normalized, &label)?;
    match record.summary_index {
        Some(index) => {
            sheet.write_number_with_format(row, 4, index as f64, &plain)?;
        }
        None => {
            sheet.write_blank(row, 4, &plain)?;
        }
    }
    Ok(())
}

/// Write `spec` as a single-sheet workbook: styled header, banded rows, bold
/// section and summary rows, fixed column widths and a frozen header row.
pub fn write_template(spec: &TemplateSpec, path: &Path) -> Result<usize> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(spec.sheet_name)?;

    let header = header_format();
    for (col, title) in spec.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    let records = spec.records();
    for (position, record) in records.iter().enumerate() {
        write_record(sheet, position as u32 + 1, record, position)?;
    }

    for (col, width) in spec.column_widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    info!(path = %path.display(), sheet = spec.sheet_name, rows = records.len(), "Wrote template");
    Ok(records.len())
}
