use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved { path: String },
    LockedElsewhere { path: String },
    Failed { path: String, reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInputs {
    pub toc_path: String,
    pub toc_sha256: String,
    pub sheet_name: String,
    pub epub_path: String,
    pub epub_sha256: String,
    pub output_path: String,
    pub normalization_table: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckCounts {
    pub entry_count: usize,
    pub hierarchy_error_count: usize,
    pub title_error_count: usize,
    pub epub_document_count: usize,
    pub book_char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFinding {
    pub row: usize,
    pub title: String,
    pub level: i64,
    pub hierarchy_error: bool,
    pub title_error: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub has_errors: bool,
    pub status_message: String,
    pub inputs: CheckInputs,
    pub counts: CheckCounts,
    pub save: Option<SaveOutcome>,
    pub findings: Vec<RowFinding>,
    pub warnings: Vec<String>,
}
