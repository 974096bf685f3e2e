//! Line tokenization
//!
//! Turns a file's raw bytes into the sequence of accepted words: split on
//! `\n`, optionally clean and sub-split each line, run every candidate
//! through the word pipeline, then gate on the configured length bounds.
//!
//! `\r` is not treated as a line terminator; a CRLF file keeps its `\r`
//! bytes unless a trim step removes them.

use std::collections::VecDeque;

use bstr::ByteSlice;

use crate::config::RefineConfig;
use crate::filters::strip_html_tags;
use crate::pipeline::process_word;

/// Lazy single-pass iterator over the accepted words of one byte buffer.
pub struct WordIter<'a> {
    content: &'a [u8],
    config: &'a RefineConfig,
    position: usize,
    pending: VecDeque<Vec<u8>>,
    lines: u64,
    candidates: u64,
}

impl<'a> WordIter<'a> {
    pub fn new(content: &'a [u8], config: &'a RefineConfig) -> Self {
        Self {
            content,
            config,
            position: 0,
            pending: VecDeque::new(),
            lines: 0,
            candidates: 0,
        }
    }

    /// Lines scanned so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Candidate words handed to the pipeline so far.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.position >= self.content.len() {
            return None;
        }

        let remaining = &self.content[self.position..];
        let (line, advance) = match memchr::memchr(b'\n', remaining) {
            Some(i) => (&remaining[..i], i + 1),
            None => (remaining, remaining.len()),
        };

        self.position += advance;
        self.lines += 1;
        Some(line)
    }

    /// Clean one line, split it into candidates, and queue the survivors.
    fn refine_line(&mut self, line: &[u8]) {
        let cleaned: Vec<u8>;
        let line = if self.config.dewebify {
            let mut stripped = strip_html_tags(line);
            if self.config.no_utf8 {
                stripped.retain(|&b| b <= 127);
            }
            cleaned = stripped;
            cleaned.as_slice()
        } else {
            line
        };

        if self.config.wordify {
            for word in line.fields_with(|c| c.is_whitespace()) {
                self.try_accept(word);
            }
        } else {
            self.try_accept(line);
        }
    }

    fn try_accept(&mut self, candidate: &[u8]) {
        self.candidates += 1;
        if let Some(word) = process_word(candidate, self.config) {
            if !word.is_empty() && self.config.length_ok(word.len()) {
                self.pending.push_back(word);
            }
        }
    }
}

impl Iterator for WordIter<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(word);
            }
            let line = self.next_line()?;
            self.refine_line(line);
        }
    }
}

/// Tokenize a whole file's bytes under the given configuration.
pub fn tokenize_file<'a>(content: &'a [u8], config: &'a RefineConfig) -> WordIter<'a> {
    WordIter::new(content, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(content: &[u8], config: &RefineConfig) -> Vec<Vec<u8>> {
        tokenize_file(content, config).collect()
    }

    #[test]
    fn test_whole_lines_as_words() {
        let config = RefineConfig::default();
        let words = collect(b"alpha\nbeta gamma\ndelta\n", &config);
        assert_eq!(words, vec![b"alpha".to_vec(), b"beta gamma".to_vec(), b"delta".to_vec()]);
    }

    #[test]
    fn test_empty_lines_dropped() {
        let config = RefineConfig::default();
        let words = collect(b"one\n\n\ntwo\n", &config);
        assert_eq!(words, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let config = RefineConfig::default();
        let words = collect(b"one\ntwo", &config);
        assert_eq!(words, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let config = RefineConfig::default();
        let words = collect(b"word\r\n", &config);
        assert_eq!(words, vec![b"word\r".to_vec()]);
    }

    #[test]
    fn test_carriage_return_removed_by_special_trim() {
        let config = RefineConfig {
            special_trim: true,
            ..Default::default()
        };
        let words = collect(b"word\r\n", &config);
        assert_eq!(words, vec![b"word".to_vec()]);
    }

    #[test]
    fn test_wordify_splits_on_whitespace_runs() {
        let config = RefineConfig {
            wordify: true,
            ..Default::default()
        };
        let words = collect(b"one  two\tthree\nfour\n", &config);
        assert_eq!(
            words,
            vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec(), b"four".to_vec()]
        );
    }

    #[test]
    fn test_dewebify_strips_line_before_split() {
        let config = RefineConfig {
            dewebify: true,
            wordify: true,
            ..Default::default()
        };
        let words = collect(b"<li>admin</li> <li>guest</li>\n", &config);
        assert_eq!(words, vec![b"admin".to_vec(), b"guest".to_vec()]);
    }

    #[test]
    fn test_no_utf8_drops_high_bytes() {
        let config = RefineConfig {
            dewebify: true,
            no_utf8: true,
            ..Default::default()
        };
        let words = collect(b"caf\xc3\xa9\n", &config);
        assert_eq!(words, vec![b"caf".to_vec()]);
    }

    #[test]
    fn test_length_gate() {
        let config = RefineConfig {
            minlen: 3,
            maxlen: 4,
            ..Default::default()
        };
        let words = collect(b"ab\nabc\nabcd\nabcde\n", &config);
        assert_eq!(words, vec![b"abc".to_vec(), b"abcd".to_vec()]);
    }

    #[test]
    fn test_length_gate_applies_after_processing() {
        // "12abc12" only passes maxlen=3 because the digits are trimmed first.
        let config = RefineConfig {
            digit_trim: true,
            maxlen: 3,
            ..Default::default()
        };
        let words = collect(b"12abc12\n", &config);
        assert_eq!(words, vec![b"abc".to_vec()]);
    }

    #[test]
    fn test_counters() {
        let config = RefineConfig {
            wordify: true,
            minlen: 4,
            ..Default::default()
        };
        let mut iter = tokenize_file(b"one two\nthree\n", &config);
        let words: Vec<_> = iter.by_ref().collect();
        assert_eq!(words, vec![b"three".to_vec()]);
        assert_eq!(iter.lines(), 2);
        assert_eq!(iter.candidates(), 3);
    }
}
