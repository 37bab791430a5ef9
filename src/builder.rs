use crate::book::{Book, BookMetadata, Chapter, Paragraph, Sentence};
use crate::classify::{byline_author, classify_line, LineKind};
use crate::notes::extract_notes;
use crate::segment::split_sentences;

/// Book title used when no level-1 heading is present.
const DEFAULT_TITLE: &str = "Untitled";

/// Chapter title used when content appears before any heading and the book
/// title is not yet known.
const FALLBACK_CHAPTER_TITLE: &str = "Section 1";

/// Parse Markdown text into a structured book.
///
/// Total over all inputs: degenerate input yields a book with the default
/// title and no chapters.
pub fn parse_book(text: &str) -> Book {
    let mut builder = BookBuilder::new();
    for line in text.lines() {
        builder.feed_line(line);
    }
    builder.finish()
}

/// Line-at-a-time builder state. All numbering is append-time: chapters,
/// paragraphs, and sentences are numbered when created and never renumbered.
struct BookBuilder {
    title: Option<String>,
    authors: Option<Vec<String>>,
    chapters: Vec<Chapter>,
    current: Option<usize>,
    pending: Vec<String>,
}

impl BookBuilder {
    fn new() -> Self {
        Self {
            title: None,
            authors: None,
            chapters: Vec::new(),
            current: None,
            pending: Vec::new(),
        }
    }

    fn feed_line(&mut self, raw_line: &str) {
        let line = raw_line.trim_end();
        match classify_line(line) {
            LineKind::Heading { level, text } => self.handle_heading(level, text),
            LineKind::Blank => self.flush_paragraph(),
            LineKind::ListItem(item) => {
                self.ensure_chapter();
                self.flush_paragraph();
                // the item line alone forms its own paragraph
                self.pending.push(item);
                self.flush_paragraph();
            }
            LineKind::Plain(text) => {
                self.record_author_candidate(text.trim());
                self.ensure_chapter();
                self.pending.push(text);
            }
        }
    }

    fn handle_heading(&mut self, level: usize, text: String) {
        self.flush_paragraph();

        if self.title.is_none() && level == 1 {
            self.title = Some(text);
            self.current = None;
            return;
        }

        self.record_author_candidate(&text);
        self.start_chapter(text);
    }

    /// First author match wins; later candidates are ignored.
    fn record_author_candidate(&mut self, text: &str) {
        if self.authors.is_some() {
            return;
        }
        if let Some(author) = byline_author(text) {
            self.authors = Some(vec![author]);
        }
    }

    fn start_chapter(&mut self, title: String) {
        let number = self.chapters.len() as u32 + 1;
        self.chapters.push(Chapter {
            chapter_number: number,
            chapter_title: title,
            paragraphs: Vec::new(),
        });
        self.current = Some(self.chapters.len() - 1);
    }

    /// Open a chapter for content that arrives without a preceding heading.
    fn ensure_chapter(&mut self) {
        if self.current.is_some() {
            return;
        }
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| FALLBACK_CHAPTER_TITLE.to_string());
        self.start_chapter(title);
    }

    /// Reduce pending lines to a paragraph on the current chapter.
    ///
    /// An empty join or a zero-sentence split discards the paragraph
    /// without consuming a number.
    fn flush_paragraph(&mut self) {
        let Some(chapter_index) = self.current else {
            self.pending.clear();
            return;
        };

        let joined = self
            .pending
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.pending.clear();

        if joined.is_empty() {
            return;
        }

        let raw_sentences = split_sentences(&joined);
        if raw_sentences.is_empty() {
            return;
        }

        let sentences = raw_sentences
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let (text, notes) = extract_notes(raw);
                Sentence {
                    sentence_number: index as u32 + 1,
                    text,
                    notes: if notes.is_empty() { None } else { Some(notes) },
                }
            })
            .collect();

        let chapter = &mut self.chapters[chapter_index];
        chapter.paragraphs.push(Paragraph {
            paragraph_number: chapter.paragraphs.len() as u32 + 1,
            sentences,
        });
    }

    fn finish(mut self) -> Book {
        self.flush_paragraph();
        Book {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            metadata: self.authors.map(|authors| BookMetadata { authors }),
            chapters: self.chapters,
        }
    }
}
