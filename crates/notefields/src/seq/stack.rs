//! Parsing, increment and sort keys for one multi-level sequence.
//!
//! ## Parsing
//!
//! Letters and digits accumulate into the current segment. `.`, `-` and `:`
//! close it (becoming its end punctuation) and open the next segment with the
//! same start punctuation. Any other character is ignored. A segment closed
//! while still empty is materialized as `"0"`, so `1..2` has three levels.
//!
//! ## Sort keys
//!
//! Each level is right-aligned in a fixed width (8 for the top level, 4 for
//! the rest) and followed by `.`. Sequences shorter than six levels are padded
//! with blank levels, so keys compare correctly as plain strings whatever the
//! depth or punctuation of the sequences being compared.

use super::segment::SeqSegment;

/// Characters that separate one sequence level from the next.
pub const SEQ_PUNCTUATION: &[char] = &['.', '-', ':'];

const DEFAULT_PUNCT: &str = ".";
const TOP_LEVEL_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 4;
const SORT_LEVELS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeqStack {
    segments: Vec<SeqSegment>,
}

impl SeqStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = SeqSegment::new("");

        for c in text.chars() {
            if c.is_ascii_alphanumeric() {
                current.push(c);
            } else if SEQ_PUNCTUATION.contains(&c) {
                if current.is_empty() {
                    current.set_text("0");
                }
                let punct = c.to_string();
                current.set_end_punct(&punct);
                segments.push(current);
                current = SeqSegment::new(&punct);
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[SeqSegment] {
        &self.segments
    }

    pub fn segment(&self, level: usize) -> Option<&SeqSegment> {
        self.segments.get(level)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the deepest level, or `None` for an empty sequence.
    pub fn max_level(&self) -> Option<usize> {
        self.segments.len().checked_sub(1)
    }

    pub fn sort_key(&self) -> String {
        let mut key = String::with_capacity(TOP_LEVEL_WIDTH + (SORT_LEVELS - 1) * LEVEL_WIDTH + 8);
        let levels = self.segments.len().max(SORT_LEVELS);
        for level in 0..levels {
            let width = if level == 0 { TOP_LEVEL_WIDTH } else { LEVEL_WIDTH };
            match self.segments.get(level) {
                Some(segment) => key.push_str(&segment.sort_key(width)),
                None => key.extend(std::iter::repeat(' ').take(width)),
            }
            key.push('.');
        }
        key
    }

    /// Increments the deepest level (or starts the sequence at `1`).
    pub fn increment(&mut self) {
        let level = self.max_level().unwrap_or(0);
        self.inc_at_level(level, false);
    }

    /// Increments the segment at `level`.
    ///
    /// Missing levels up to `level` are added as `0` first, so incrementing
    /// level 2 of `1.3` yields `1.3.1`. With `remove_deeper`, levels below
    /// `level` are dropped before incrementing, so level 1 of `1.3.2` yields
    /// `1.4`.
    pub fn inc_at_level(&mut self, level: usize, remove_deeper: bool) {
        if remove_deeper {
            self.truncate(level + 1);
        }

        while self.segments.len() <= level {
            let start = match self.segments.last_mut() {
                Some(last) => {
                    if last.end_punct().is_empty() {
                        last.set_end_punct(DEFAULT_PUNCT);
                    }
                    last.end_punct().to_string()
                }
                None => String::new(),
            };
            self.segments.push(SeqSegment::with_text("0", &start, ""));
        }

        if let Some(segment) = self.segments.get_mut(level) {
            segment.increment();
        }
    }

    /// Keeps at most `levels` segments; the new last segment loses its closing punctuation.
    pub fn truncate(&mut self, levels: usize) {
        if self.segments.len() > levels {
            self.segments.truncate(levels);
            if let Some(last) = self.segments.last_mut() {
                last.set_end_punct("");
            }
        }
    }
}

impl std::fmt::Display for SeqStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{}{}", segment.text(), segment.end_punct())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(stack: &SeqStack) -> Vec<&str> {
        stack.segments().iter().map(|s| s.text()).collect()
    }

    #[test]
    fn test_parses_dotted_levels() {
        let stack = SeqStack::parse("1.2.3a");
        assert_eq!(texts(&stack), vec!["1", "2", "3a"]);
        assert_eq!(stack.segment(1).unwrap().start_punct(), ".");
        assert_eq!(stack.segment(1).unwrap().end_punct(), ".");
        assert_eq!(stack.segment(2).unwrap().end_punct(), "");
        assert_eq!(stack.to_string(), "1.2.3a");
    }

    #[test]
    fn test_parses_mixed_punctuation() {
        let stack = SeqStack::parse("2024-03:b");
        assert_eq!(texts(&stack), vec!["2024", "03", "b"]);
        assert_eq!(stack.segment(1).unwrap().start_punct(), "-");
        assert_eq!(stack.segment(2).unwrap().start_punct(), ":");
        assert_eq!(stack.to_string(), "2024-03:b");
    }

    #[test]
    fn test_empty_closed_segment_becomes_zero() {
        let stack = SeqStack::parse("1..2");
        assert_eq!(texts(&stack), vec!["1", "0", "2"]);
        assert_eq!(stack.to_string(), "1.0.2");
    }

    #[test]
    fn test_ignores_other_characters() {
        let stack = SeqStack::parse(" 1 . 2 #");
        assert_eq!(texts(&stack), vec!["1", "2"]);
        assert_eq!(stack.to_string(), "1.2");
    }

    #[test]
    fn test_keeps_trailing_punctuation() {
        let stack = SeqStack::parse("3.");
        assert_eq!(texts(&stack), vec!["3"]);
        assert_eq!(stack.to_string(), "3.");
    }

    #[test]
    fn test_empty_text_parses_to_empty_stack() {
        let stack = SeqStack::parse("");
        assert!(stack.is_empty());
        assert_eq!(stack.max_level(), None);
        assert_eq!(stack.to_string(), "");
    }

    #[test]
    fn test_sort_key_is_fixed_width() {
        let short = SeqStack::parse("1").sort_key();
        let deep = SeqStack::parse("1.2.3.4.5.6").sort_key();
        assert_eq!(short.len(), deep.len());
        assert_eq!(short, "00000001.    .    .    .    .    .");
        assert_eq!(deep, "00000001.0002.0003.0004.0005.0006.");
    }

    #[test]
    fn test_sort_key_ignores_punctuation() {
        assert_eq!(
            SeqStack::parse("1.2").sort_key(),
            SeqStack::parse("1-2").sort_key()
        );
    }

    #[test]
    fn test_sort_keys_order_sequences() {
        let mut seqs = vec!["2.1", "1.10", "2", "1.2", "1", "1.1"];
        seqs.sort_by_key(|s| SeqStack::parse(s).sort_key());
        assert_eq!(seqs, vec!["1", "1.1", "1.2", "1.10", "2", "2.1"]);
    }

    #[test]
    fn test_lettered_levels_sort_after_their_parent() {
        let mut seqs = vec!["1.b", "1", "1.a"];
        seqs.sort_by_key(|s| SeqStack::parse(s).sort_key());
        assert_eq!(seqs, vec!["1", "1.a", "1.b"]);
    }

    #[test]
    fn test_increment_bumps_deepest_level() {
        let mut stack = SeqStack::parse("1.9");
        stack.increment();
        assert_eq!(stack.to_string(), "1.10");

        let mut empty = SeqStack::new();
        empty.increment();
        assert_eq!(empty.to_string(), "1");
    }

    #[test]
    fn test_inc_at_level_adds_missing_levels() {
        let mut stack = SeqStack::parse("1.3");
        stack.inc_at_level(2, false);
        assert_eq!(stack.to_string(), "1.3.1");

        let mut stack = SeqStack::parse("1");
        stack.inc_at_level(3, false);
        assert_eq!(stack.to_string(), "1.0.0.1");
    }

    #[test]
    fn test_inc_at_level_keeps_existing_punctuation() {
        let mut stack = SeqStack::parse("2024-");
        stack.inc_at_level(1, false);
        assert_eq!(stack.to_string(), "2024-1");
    }

    #[test]
    fn test_inc_at_level_removes_deeper_levels() {
        let mut stack = SeqStack::parse("1.3.2");
        stack.inc_at_level(1, true);
        assert_eq!(stack.to_string(), "1.4");
    }

    #[test]
    fn test_inc_at_level_keeps_deeper_levels_when_asked() {
        let mut stack = SeqStack::parse("1.3.2");
        stack.inc_at_level(1, false);
        assert_eq!(stack.to_string(), "1.4.2");
    }

    #[test]
    fn test_letter_levels_increment() {
        let mut stack = SeqStack::parse("II.B");
        stack.increment();
        assert_eq!(stack.to_string(), "II.C");
        stack.inc_at_level(0, true);
        assert_eq!(stack.to_string(), "IJ");
    }
}
