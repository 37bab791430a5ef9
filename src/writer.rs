use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::book::{Book, BookStats};

/// Top-level output shape: the book record under a `book` key.
#[derive(Serialize)]
struct BookEnvelope<'a> {
    book: &'a Book,
}

/// Render the book as pretty-printed JSON with a trailing newline.
///
/// Optional fields are omitted entirely, never emitted as null.
pub fn render_book_json(book: &Book) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(&BookEnvelope { book })
        .context("Failed to serialize book to JSON")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered book JSON to the output path.
pub async fn write_book_json(output_path: &Path, book: &Book) -> Result<()> {
    let rendered = render_book_json(book)?;

    let file = tokio::fs::File::create(output_path)
        .await
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(rendered.as_bytes()).await?;
    writer.flush().await?;

    info!(
        "Wrote {} bytes to {}",
        rendered.len(),
        output_path.display()
    );
    Ok(())
}

/// Write run summary counts as JSON.
pub async fn write_stats_json(stats_path: &Path, stats: &BookStats) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(stats).context("Failed to serialize run stats")?;
    tokio::fs::write(stats_path, rendered)
        .await
        .with_context(|| format!("Failed to write stats file {}", stats_path.display()))?;
    Ok(())
}
