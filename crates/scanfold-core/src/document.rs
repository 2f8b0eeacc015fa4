//! A rope-backed reference document implementing [`DocumentAccess`].

use std::collections::HashMap;

use ropey::Rope;

use crate::accessor::DocumentAccess;
use crate::fold::FoldLevel;
use crate::styles::{StyleRun, StyleTag};

/// In-memory host document.
///
/// Text lives in a [`ropey::Rope`] (char-indexed, O(log n) line lookup); styles are
/// stored one tag per character; fold records are stored one per line and grow on
/// demand. Intended as the host side for editors without their own document storage,
/// and as the fixture for tests, examples and benchmarks.
pub struct MemoryDocument {
    rope: Rope,
    styles: Vec<StyleTag>,
    /// Next unstyled position; `extend_style` writes from here.
    styled_to: usize,
    levels: Vec<FoldLevel>,
    config: HashMap<String, i32>,
    fold_writes: usize,
}

impl MemoryDocument {
    /// Build a document from text. All styles start as [`StyleTag::Default`] and all
    /// fold records at [`FoldLevel::base`].
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let char_count = rope.len_chars();
        Self {
            rope,
            styles: vec![StyleTag::Default; char_count],
            styled_to: 0,
            levels: Vec::new(),
            config: HashMap::new(),
            fold_writes: 0,
        }
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count (a trailing terminator opens a final empty line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Character position of the start of `line`.
    pub fn line_start(&self, line: usize) -> usize {
        self.rope.line_to_char(line)
    }

    /// Content range `[start, end)` of `line`, terminator characters excluded.
    pub fn line_range(&self, line: usize) -> (usize, usize) {
        let start = self.rope.line_to_char(line);
        let mut end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1)
        } else {
            self.rope.len_chars()
        };
        while end > start {
            let ch = self.rope.char(end - 1);
            if ch == '\n' || ch == '\r' {
                end -= 1;
            } else {
                break;
            }
        }
        (start, end)
    }

    /// Set a named integer configuration value.
    pub fn set_config(&mut self, name: impl Into<String>, value: i32) {
        self.config.insert(name.into(), value);
    }

    /// Number of fold records written so far.
    ///
    /// Engines only write a record when it differs from what is stored, so a repeated
    /// fold pass over unchanged input leaves this count unchanged. Hosts that forward
    /// fold changes as notifications can use the same discipline.
    pub fn fold_writes(&self) -> usize {
        self.fold_writes
    }

    /// Compress the style store over `[start, end)` back into runs.
    ///
    /// Adjacent equal tags merge into one run, so the result is the minimal contiguous
    /// cover of the range.
    pub fn style_runs(&self, start: usize, end: usize) -> Vec<StyleRun> {
        let end = end.min(self.styles.len());
        let mut runs = Vec::new();
        let mut pos = start;
        while pos < end {
            let tag = self.styles[pos];
            let run_start = pos;
            while pos < end && self.styles[pos] == tag {
                pos += 1;
            }
            runs.push(StyleRun::new(run_start, pos, tag));
        }
        runs
    }
}

impl DocumentAccess for MemoryDocument {
    fn char_at(&self, pos: usize) -> char {
        self.rope.char(pos)
    }

    fn safe_char_at(&self, pos: usize) -> char {
        if pos < self.rope.len_chars() {
            self.rope.char(pos)
        } else {
            ' '
        }
    }

    fn line_of(&self, pos: usize) -> usize {
        self.rope.char_to_line(pos.min(self.rope.len_chars()))
    }

    fn style_at(&self, pos: usize) -> StyleTag {
        self.styles.get(pos).copied().unwrap_or_default()
    }

    fn start_styling(&mut self, pos: usize) {
        self.styled_to = pos;
    }

    fn extend_style(&mut self, end_pos: usize, tag: StyleTag) {
        let end = (end_pos + 1).min(self.styles.len());
        while self.styled_to < end {
            self.styles[self.styled_to] = tag;
            self.styled_to += 1;
        }
    }

    fn fold_level(&self, line: usize) -> FoldLevel {
        self.levels.get(line).copied().unwrap_or_default()
    }

    fn set_fold_level(&mut self, line: usize, level: FoldLevel) {
        if self.levels.len() <= line {
            self.levels.resize(line + 1, FoldLevel::base());
        }
        self.levels[line] = level;
        self.fold_writes += 1;
    }

    fn config_int(&self, name: &str, default: i32) -> i32 {
        self.config.get(name).copied().unwrap_or(default)
    }
}
