use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use ::epub::doc::EpubDoc;
use tracing::{info, warn};

mod html_text;

pub use html_text::html_to_text;

#[derive(Debug, Clone, Default)]
pub struct ExtractedBook {
    pub text: String,
    pub document_count: usize,
    pub warnings: Vec<String>,
}

pub fn load_book_text(path: &Path) -> Result<ExtractedBook> {
    let doc =
        EpubDoc::new(path).with_context(|| format!("failed to open EPUB: {}", path.display()))?;
    let book = collect_documents(doc);

    for warning in &book.warnings {
        warn!(path = %path.display(), warning = %warning, "EPUB extraction warning");
    }
    info!(
        path = %path.display(),
        documents = book.document_count,
        chars = book.text.chars().count(),
        "extracted EPUB text"
    );

    Ok(book)
}

pub fn extract_book_text<R: Read + Seek>(reader: R) -> Result<ExtractedBook> {
    let doc = EpubDoc::from_reader(reader).context("failed to open EPUB")?;
    Ok(collect_documents(doc))
}

fn collect_documents<R: Read + Seek>(mut doc: EpubDoc<R>) -> ExtractedBook {
    let mut book = ExtractedBook::default();
    let mut bodies = String::new();

    loop {
        let id = doc.get_current_id().unwrap_or_default();
        match doc.get_current_str() {
            Some((content, _mime)) if html_text::is_navigation_document(&content) => {}
            Some((content, _mime)) => match html_text::body_text(&content) {
                Ok(text) => {
                    bodies.push_str(&text);
                    book.document_count += 1;
                }
                Err(error) => book
                    .warnings
                    .push(format!("failed to render document '{id}': {error}")),
            },
            None => book
                .warnings
                .push(format!("spine item '{id}' could not be read")),
        }

        if !doc.go_next() {
            break;
        }
    }

    book.text = html_to_text(&bodies);
    book
}
