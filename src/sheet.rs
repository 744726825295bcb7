use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::info;
use umya_spreadsheet::XlsxError;

use crate::validation::{CellValue, TocEntry, ValidationReport};

const HIGHLIGHT_ARGB: &str = "FFFFFF00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocLayout {
    pub title_column: u32,
    pub level_column: u32,
    pub header_rows: u32,
}

impl Default for TocLayout {
    fn default() -> Self {
        Self {
            title_column: 2,
            level_column: 3,
            header_rows: 1,
        }
    }
}

impl TocLayout {
    pub fn spreadsheet_row(&self, entry_index: usize) -> usize {
        self.header_rows as usize + entry_index + 1
    }
}

#[derive(Debug, Clone)]
pub struct TocSheet {
    pub name: String,
    pub entries: Vec<TocEntry>,
    layout: TocLayout,
}

impl TocSheet {
    pub fn from_range(name: impl Into<String>, cells: &Range<Data>, layout: TocLayout) -> Self {
        let entries = match cells.end() {
            Some((last_row, _)) => (layout.header_rows..=last_row)
                .map(|row| {
                    TocEntry::new(
                        CellValue::from(cells.get_value((row, layout.title_column))),
                        CellValue::from(cells.get_value((row, layout.level_column))),
                    )
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            name: name.into(),
            entries,
            layout,
        }
    }

    pub fn layout(&self) -> TocLayout {
        self.layout
    }

    // Zero-based (row, column).
    pub fn flagged_cells(&self, report: &ValidationReport) -> BTreeSet<(u32, u32)> {
        let mut flagged = BTreeSet::new();
        for (index, row) in report.rows.iter().enumerate() {
            let sheet_row = self.layout.header_rows + index as u32;
            if row.hierarchy_error {
                flagged.insert((sheet_row, self.layout.level_column));
            }
            if row.title_error {
                flagged.insert((sheet_row, self.layout.title_column));
            }
        }
        flagged
    }

    pub fn save_annotated_copy(
        &self,
        report: &ValidationReport,
        source: &Path,
        output: &Path,
    ) -> Result<usize, XlsxError> {
        let mut book = umya_spreadsheet::reader::xlsx::read(source)?;
        let worksheet = book.get_sheet_by_name_mut(&self.name).ok_or_else(|| {
            XlsxError::CellError(format!("worksheet '{}' not found in workbook", self.name))
        })?;

        let flagged = self.flagged_cells(report);
        for (row, col) in &flagged {
            worksheet
                .get_cell_mut((col + 1, row + 1))
                .get_style_mut()
                .set_background_color(HIGHLIGHT_ARGB);
        }

        umya_spreadsheet::writer::xlsx::write(&book, output)?;
        Ok(flagged.len())
    }
}

pub fn load_toc_sheet(path: &Path, layout: TocLayout) -> Result<TocSheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open ToC workbook: {}", path.display()))?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("ToC workbook has no worksheets: {}", path.display()))?;
    let cells = workbook
        .worksheet_range(&name)
        .with_context(|| format!("failed to read worksheet '{name}' in {}", path.display()))?;

    let sheet = TocSheet::from_range(name, &cells, layout);
    info!(
        path = %path.display(),
        sheet = %sheet.name,
        entries = sheet.entries.len(),
        "loaded ToC sheet"
    );

    Ok(sheet)
}
