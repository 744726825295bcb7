use anyhow::Result;
use tracing::info;

use crate::cli::ExtractArgs;
use crate::epub::load_book_text;
use crate::util::write_text;
use crate::validation::load_normalizer;

pub fn run(args: ExtractArgs) -> Result<()> {
    let book = load_book_text(&args.epub)?;

    let text = if args.normalized {
        load_normalizer(args.normalization_table.as_deref())?.normalize(&book.text)
    } else {
        book.text
    };

    match &args.output {
        Some(path) => {
            write_text(path, &text)?;
            info!(
                path = %path.display(),
                chars = text.chars().count(),
                normalized = args.normalized,
                "wrote extracted text"
            );
        }
        None => println!("{text}"),
    }

    Ok(())
}
