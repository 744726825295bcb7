use serde::Serialize;

mod cell;
mod containment;
mod hierarchy;
mod normalize;
#[cfg(test)]
mod tests;

pub use cell::CellValue;
pub use containment::{NormalizedCorpus, is_missing};
pub use hierarchy::validate_hierarchy;
pub use normalize::{Normalizer, load_normalizer};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TocEntry {
    pub title: CellValue,
    pub level: CellValue,
}

impl TocEntry {
    pub fn new(title: CellValue, level: CellValue) -> Self {
        Self { title, level }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RowReport {
    pub hierarchy_error: bool,
    pub title_error: bool,
}

impl RowReport {
    pub fn has_error(&self) -> bool {
        self.hierarchy_error || self.title_error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub rows: Vec<RowReport>,
}

impl ValidationReport {
    pub fn has_hierarchy_errors(&self) -> bool {
        self.rows.iter().any(|row| row.hierarchy_error)
    }

    pub fn has_title_errors(&self) -> bool {
        self.rows.iter().any(|row| row.title_error)
    }

    pub fn has_errors(&self) -> bool {
        self.has_hierarchy_errors() || self.has_title_errors()
    }

    pub fn hierarchy_error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.hierarchy_error).count()
    }

    pub fn title_error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.title_error).count()
    }
}

pub fn check(entries: &[TocEntry], book_text: &str, normalizer: &Normalizer) -> ValidationReport {
    let corpus = NormalizedCorpus::new(book_text, normalizer);
    check_against(entries, &corpus, normalizer)
}

fn check_against(
    entries: &[TocEntry],
    corpus: &NormalizedCorpus,
    normalizer: &Normalizer,
) -> ValidationReport {
    let hierarchy_errors = validate_hierarchy(entries.iter().map(|entry| &entry.level));

    let rows = entries
        .iter()
        .zip(hierarchy_errors)
        .map(|(entry, hierarchy_error)| RowReport {
            hierarchy_error,
            title_error: is_missing(&entry.title, corpus, normalizer),
        })
        .collect();

    ValidationReport { rows }
}
