use skimmer_common::SegmenterKind;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Sentence-final punctuation used by the fallback splitter
const SENTENCE_ENDINGS: &[char] = &['.', '!', '?', '。', '！', '？'];

/// Abbreviations that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "vs.", "etc.", "e.g.",
    "i.e.", "No.", "Inc.", "Ltd.", "Co.", "Corp.", "Gen.", "Gov.", "Sen.", "Rep.",
];

/// Splits text into sentences
pub trait SentenceSegmenter: Send + Sync {
    /// Ordered, trimmed, non-empty sentences of `text`
    fn split(&self, text: &str) -> Vec<String>;
}

/// Unicode (UAX #29) sentence boundaries with abbreviation repair
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl SentenceSegmenter for UnicodeSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        merge_abbreviations(text.split_sentence_bounds())
    }
}

/// Punctuation-only splitter for when no segmentation data is available
///
/// Breaks after sentence-final punctuation followed by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSegmenter;

impl SentenceSegmenter for NaiveSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if !SENTENCE_ENDINGS.contains(&c) {
                continue;
            }
            // Keep runs like "?!" or "..." together
            while let Some(&(_, next)) = chars.peek() {
                if SENTENCE_ENDINGS.contains(&next) || next == '"' || next == '\'' || next == ')' {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map(|&(i, _)| i).unwrap_or(text.len());
            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            // CJK full stops need no trailing space
            if at_boundary || matches!(c, '。' | '！' | '？') {
                pieces.push(&text[start..end]);
                start = end;
            }
        }
        if start < text.len() {
            pieces.push(&text[start..]);
        }

        merge_abbreviations(pieces.into_iter())
    }
}

/// Trim pieces, drop empty ones and glue back splits made after abbreviations
fn merge_abbreviations<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut carry = false;

    for piece in pieces {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        if carry {
            if let Some(last) = sentences.last_mut() {
                last.push(' ');
                last.push_str(piece);
            }
        } else {
            sentences.push(piece.to_string());
        }

        carry = sentences
            .last()
            .map(|s| ends_with_abbreviation(s))
            .unwrap_or(false);
    }

    sentences
}

fn ends_with_abbreviation(sentence: &str) -> bool {
    let last_word = sentence.rsplit(char::is_whitespace).next().unwrap_or(sentence);
    ABBREVIATIONS.iter().any(|abbr| last_word == *abbr)
}

/// Build the segmenter selected in configuration
pub fn segmenter_for(kind: SegmenterKind) -> Arc<dyn SentenceSegmenter> {
    match kind {
        SegmenterKind::Unicode => Arc::new(UnicodeSegmenter),
        SegmenterKind::Naive => Arc::new(NaiveSegmenter),
    }
}
