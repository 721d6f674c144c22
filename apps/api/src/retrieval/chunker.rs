//! Blank-line chunker for the achievements corpus.
//!
//! Each record is split on paragraph boundaries (`\n\n`); every
//! non-empty paragraph becomes one chunk with a stable 0-based integer
//! id in corpus insertion order. Ids are assigned exactly once at index
//! build time and referenced by quotes for the lifetime of the process.

use super::Chunk;

/// Splits a raw corpus file into records on blank-line boundaries.
pub fn split_corpus(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns corpus records into chunks with contiguous ids starting at 0.
pub fn chunk_records(records: &[String]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    for record in records {
        for paragraph in record.split("\n\n") {
            let trimmed = paragraph.trim();
            if trimmed.is_empty() {
                continue;
            }
            chunks.push(Chunk {
                id: chunks.len() as u32,
                text: trimmed.to_string(),
            });
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_corpus_on_blank_lines() {
        let text = "Led the checkout rewrite.\n\nCut page load by 40%.\n\n";
        let records = split_corpus(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "Led the checkout rewrite.");
    }

    #[test]
    fn test_split_corpus_empty_text() {
        assert!(split_corpus("").is_empty());
        assert!(split_corpus("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_chunk_ids_contiguous_in_insertion_order() {
        let records = vec![
            "First achievement.".to_string(),
            "Second.\n\nThird.".to_string(),
        ];
        let chunks = chunk_records(&records);
        assert_eq!(chunks.len(), 3);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, i as u32);
        }
        assert_eq!(chunks[2].text, "Third.");
    }

    #[test]
    fn test_chunk_records_skips_whitespace_only() {
        let records = vec!["  \n\n  ".to_string(), "Real content".to_string()];
        let chunks = chunk_records(&records);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].id, 0);
        assert_eq!(chunks[0].text, "Real content");
    }

    #[test]
    fn test_chunking_deterministic() {
        let records = vec!["Alpha\n\nBeta".to_string(), "Gamma".to_string()];
        let a = chunk_records(&records);
        let b = chunk_records(&records);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.text, y.text);
        }
    }
}
