use anyhow::Result;

use crate::cli::NormalizeArgs;
use crate::validation::load_normalizer;

pub fn run(args: NormalizeArgs) -> Result<()> {
    let normalizer = load_normalizer(args.normalization_table.as_deref())?;
    println!("{}", normalizer.normalize(&args.text));
    Ok(())
}
