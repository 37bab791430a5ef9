use serde::{Deserialize, Serialize};

/// A fully parsed book: title, optional metadata, and ordered chapters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    /// Present only when at least one metadata field was populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BookMetadata>,
    pub chapters: Vec<Chapter>,
}

/// Book-level metadata. Only authors are populated by the parser today.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub authors: Vec<String>,
}

/// A titled section of the book, numbered by order of appearance.
/// Numbers are assigned at creation and never change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub chapter_number: u32,
    pub chapter_title: String,
    pub paragraphs: Vec<Paragraph>,
}

/// A run of content lines reduced to one or more sentences.
/// Numbering is 1-based and local to the owning chapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub paragraph_number: u32,
    pub sentences: Vec<Sentence>,
}

/// A terminator-delimited unit of paragraph text, whitespace-normalized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub sentence_number: u32,
    pub text: String,
    /// Annotation payloads extracted from the text; absent when none were found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

/// Summary counts for a parsed book
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookStats {
    pub chapters: u64,
    pub paragraphs: u64,
    pub sentences: u64,
    pub notes: u64,
}

impl Book {
    /// Collect summary counts across the whole book
    pub fn stats(&self) -> BookStats {
        let mut stats = BookStats {
            chapters: self.chapters.len() as u64,
            paragraphs: 0,
            sentences: 0,
            notes: 0,
        };

        for chapter in &self.chapters {
            stats.paragraphs += chapter.paragraphs.len() as u64;
            for paragraph in &chapter.paragraphs {
                stats.sentences += paragraph.sentences.len() as u64;
                for sentence in &paragraph.sentences {
                    if let Some(ref notes) = sentence.notes {
                        stats.notes += notes.len() as u64;
                    }
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(number: u32, text: &str, notes: Option<Vec<&str>>) -> Sentence {
        Sentence {
            sentence_number: number,
            text: text.to_string(),
            notes: notes.map(|ns| ns.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_stats_counts_all_levels() {
        let book = Book {
            title: "Counts".to_string(),
            metadata: None,
            chapters: vec![
                Chapter {
                    chapter_number: 1,
                    chapter_title: "One".to_string(),
                    paragraphs: vec![Paragraph {
                        paragraph_number: 1,
                        sentences: vec![
                            sentence(1, "First.", None),
                            sentence(2, "Second.", Some(vec!["1", "2"])),
                        ],
                    }],
                },
                Chapter {
                    chapter_number: 2,
                    chapter_title: "Two".to_string(),
                    paragraphs: vec![],
                },
            ],
        };

        let stats = book.stats();
        assert_eq!(stats.chapters, 2);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.notes, 2);
    }

    #[test]
    fn test_metadata_omitted_when_absent() {
        let book = Book {
            title: "No metadata".to_string(),
            metadata: None,
            chapters: vec![],
        };

        let json = serde_json::to_string(&book).unwrap();
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn test_notes_omitted_when_absent() {
        let s = sentence(1, "Plain.", None);
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("notes"));

        let s = sentence(1, "Annotated.", Some(vec!["1"]));
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"notes\":[\"1\"]"));
    }

    #[test]
    fn test_book_round_trip() {
        let book = Book {
            title: "Round trip".to_string(),
            metadata: Some(BookMetadata {
                authors: vec!["Jane Doe".to_string()],
            }),
            chapters: vec![Chapter {
                chapter_number: 1,
                chapter_title: "Ch1".to_string(),
                paragraphs: vec![Paragraph {
                    paragraph_number: 1,
                    sentences: vec![sentence(1, "Hello.", Some(vec!["a"]))],
                }],
            }],
        };

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }
}
