use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Buffer size for async reading
const INPUT_BUFFER_SIZE: usize = 8192;

/// Alternate input path tried when the requested one does not exist.
pub const FALLBACK_INPUT: &str = "book.markdown";

/// Statistics for one input load
#[derive(Debug, Clone)]
pub struct LoadStats {
    pub path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Resolve the input path, falling back to one alternate fixed path.
///
/// Missing input (neither path exists) is fatal.
pub fn resolve_input_path(requested: &Path, fallback: &Path) -> Result<PathBuf> {
    if requested.exists() {
        return Ok(requested.to_path_buf());
    }

    if fallback.exists() {
        warn!(
            "Input file {} not found, using fallback {}",
            requested.display(),
            fallback.display()
        );
        return Ok(fallback.to_path_buf());
    }

    bail!("Input file '{}' not found", requested.display());
}

/// Load the full document text with async buffered line reads.
///
/// Line breaks are preserved as `\n`. Open and decode failures are fatal;
/// there is no partial output.
pub async fn load_text<P: AsRef<Path>>(path: P) -> Result<(String, LoadStats)> {
    let path = path.as_ref();
    let start_time = std::time::Instant::now();

    debug!("Starting async read of file: {}", path.display());

    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let reader = BufReader::with_capacity(INPUT_BUFFER_SIZE, file);
    let mut lines = reader.lines();
    let mut text = String::new();
    let mut line_count = 0u64;
    let mut byte_count = 0u64;

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                byte_count += line.len() as u64 + 1;
                line_count += 1;
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&line);
            }
            Ok(None) => break,
            Err(e) => {
                bail!(
                    "Failed to decode {} as UTF-8 text at line {}: {}",
                    path.display(),
                    line_count + 1,
                    e
                );
            }
        }
    }

    let stats = LoadStats {
        path: path.display().to_string(),
        lines_read: line_count,
        bytes_read: byte_count,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Read {}: {} lines, {} bytes in {}ms",
        path.display(),
        stats.lines_read,
        stats.bytes_read,
        stats.duration_ms
    );

    Ok((text, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    #[tokio::test]
    async fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("book.md");
        fs::write(&file_path, "# Title\n\nA line.\n").await.unwrap();

        let (text, stats) = load_text(&file_path).await.unwrap();
        assert_eq!(text, "# Title\n\nA line.");
        assert_eq!(stats.lines_read, 3);
        assert!(stats.bytes_read > 0);
    }

    #[tokio::test]
    async fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.md");
        fs::write(&file_path, "").await.unwrap();

        let (text, stats) = load_text(&file_path).await.unwrap();
        assert_eq!(text, "");
        assert_eq!(stats.lines_read, 0);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing.md");

        let result = load_text(&file_path).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_invalid_utf8_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.md");
        std::fs::write(&file_path, [0xFF, 0xFE, 0xFD]).unwrap();

        let result = load_text(&file_path).await;
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("UTF-8"));
    }

    #[tokio::test]
    async fn test_load_preserves_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.md");
        fs::write(&file_path, "Hello, 世界!\nÉmojis 🦀\n").await.unwrap();

        let (text, _) = load_text(&file_path).await.unwrap();
        assert_eq!(text, "Hello, 世界!\nÉmojis 🦀");
    }

    #[test]
    fn test_resolve_requested_path() {
        let temp_dir = TempDir::new().unwrap();
        let requested = temp_dir.path().join("book.md");
        std::fs::write(&requested, "content").unwrap();
        let fallback = temp_dir.path().join("book.markdown");

        let resolved = resolve_input_path(&requested, &fallback).unwrap();
        assert_eq!(resolved, requested);
    }

    #[test]
    fn test_resolve_fallback_path() {
        let temp_dir = TempDir::new().unwrap();
        let requested = temp_dir.path().join("book.md");
        let fallback = temp_dir.path().join("book.markdown");
        std::fs::write(&fallback, "content").unwrap();

        let resolved = resolve_input_path(&requested, &fallback).unwrap();
        assert_eq!(resolved, fallback);
    }

    #[test]
    fn test_resolve_neither_path_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let requested = temp_dir.path().join("book.md");
        let fallback = temp_dir.path().join("book.markdown");

        let result = resolve_input_path(&requested, &fallback);
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("not found"));
    }
}
