//! Style tags and style runs.
//!
//! Classification covers a line's content range with contiguous, non-overlapping
//! [`StyleRun`]s in increasing order. Line-terminator characters are excluded from run
//! coverage; the scan driver styles them separately.

/// The closed set of style tags a classifier can assign.
///
/// Hosts map tags to presentation (colors, fonts) outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    /// Unstructured text: values, disqualified lines, blank space.
    #[default]
    Default,
    /// A comment from its leader character to the end of the line.
    Comment,
    /// A `[section]` header, brackets included.
    Section,
    /// The key part of a `key=value` assignment.
    Key,
    /// A single `=` or `:` assignment character.
    Assignment,
    /// The `@` marker introducing a default-value line.
    DefaultValueMarker,
}

/// A half-open styled range `[start, end)` in document character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRun {
    /// First character position covered by the run.
    pub start: usize,
    /// One past the last character position covered by the run.
    pub end: usize,
    /// The tag carried by every position in the run.
    pub tag: StyleTag,
}

impl StyleRun {
    /// Create a run for `[start, end)` with the given tag.
    pub fn new(start: usize, end: usize, tag: StyleTag) -> Self {
        Self { start, end, tag }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the run covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if the run contains a character position.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}
