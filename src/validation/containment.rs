use super::cell::CellValue;
use super::normalize::Normalizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCorpus(String);

impl NormalizedCorpus {
    pub fn new(book_text: &str, normalizer: &Normalizer) -> Self {
        Self(normalizer.normalize(book_text))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

// A blank title normalizes to "" and is therefore always contained.
pub fn is_missing(title: &CellValue, corpus: &NormalizedCorpus, normalizer: &Normalizer) -> bool {
    !corpus.contains(&normalizer.normalize_cell(title))
}
