//! Vocabulary files: JSON object `{"word": [x, y]}` or CSV with header `word,x,y`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use conquest::api::Vocabulary;
use polars::prelude::*;

/// Load a vocabulary, choosing the parser by file extension.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let vocab = match ext.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => bail!(
            "unsupported vocabulary file {} (expected .json or .csv)",
            path.display()
        ),
    };
    tracing::info!(words = vocab.len(), path = %path.display(), "vocabulary loaded");
    Ok(vocab)
}

fn load_json(path: &Path) -> Result<Vocabulary> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let map: BTreeMap<String, [f64; 2]> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Vocabulary::from_entries(map)
        .with_context(|| format!("building vocabulary from {}", path.display()))
}

fn load_csv(path: &Path) -> Result<Vocabulary> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "vocabulary csv shape");

    let words = df.column("word")?.cast(&DataType::String)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let (words, xs, ys) = (words.str()?, xs.f64()?, ys.f64()?);

    let mut vocab = Vocabulary::new();
    for (row, ((w, x), y)) in words
        .into_iter()
        .zip(xs.into_iter())
        .zip(ys.into_iter())
        .enumerate()
    {
        // Header is line 1.
        let line = row + 2;
        let (Some(w), Some(x), Some(y)) = (w, x, y) else {
            bail!("{} line {line}: missing word, x or y", path.display());
        };
        vocab
            .insert(w, [x, y])
            .with_context(|| format!("{} line {line}", path.display()))?;
    }
    Ok(vocab)
}
