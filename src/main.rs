use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use chapterize::builder::parse_book;
use chapterize::loader;
use chapterize::writer;

#[derive(Parser, Debug)]
#[command(name = "chapterize")]
#[command(about = "Transforms a Markdown book into structured chapter and sentence JSON")]
#[command(version)]
struct Args {
    /// Path to the Markdown input file
    #[arg(long, default_value = "book.md")]
    input: PathBuf,

    /// Path for the JSON output
    #[arg(long, default_value = "book.json")]
    output: PathBuf,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting chapterize");
    info!(?args, "Parsed CLI arguments");

    let input_path = loader::resolve_input_path(&args.input, Path::new(loader::FALLBACK_INPUT))?;
    let (text, load_stats) = loader::load_text(&input_path).await?;

    let book = parse_book(&text);
    let stats = book.stats();
    info!(
        "Parsed book \"{}\": {} chapters, {} paragraphs, {} sentences, {} notes",
        book.title, stats.chapters, stats.paragraphs, stats.sentences, stats.notes
    );

    writer::write_book_json(&args.output, &book).await?;

    if let Some(ref stats_path) = args.stats_out {
        writer::write_stats_json(stats_path, &stats).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    println!(
        "chapterize v{} - {}",
        env!("CARGO_PKG_VERSION"),
        input_path.display()
    );
    println!(
        "Read {} lines ({} bytes), parsed \"{}\"",
        load_stats.lines_read, load_stats.bytes_read, book.title
    );
    println!(
        "Chapters: {}, paragraphs: {}, sentences: {}, notes: {}",
        stats.chapters, stats.paragraphs, stats.sentences, stats.notes
    );
    println!("Output written to {}", args.output.display());

    Ok(())
}
