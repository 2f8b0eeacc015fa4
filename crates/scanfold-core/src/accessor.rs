//! The document access capability consumed by language engines.

use crate::fold::FoldLevel;
use crate::styles::StyleTag;

/// Host-document capability: everything a lexing engine may read or write.
///
/// Implemented by the editor host (or by [`MemoryDocument`](crate::MemoryDocument) for
/// hosts without their own storage). Engines hold no state across calls beyond what
/// they persist through this trait, so repeated or overlapping-range invocations are
/// safe as long as each starts at a line boundary.
///
/// Styling uses a single write primitive with a moving cursor: [`start_styling`]
/// positions the cursor, and each [`extend_style`] call declares that every position
/// from the cursor up to and including its end position carries one tag. Skipped
/// positions are therefore absorbed into the next write.
///
/// [`start_styling`]: DocumentAccess::start_styling
/// [`extend_style`]: DocumentAccess::extend_style
pub trait DocumentAccess {
    /// Character at `pos`. Well-defined only for positions inside the document.
    fn char_at(&self, pos: usize) -> char;

    /// Character at `pos`, or the sentinel `' '` at or past the end of the document.
    ///
    /// The sentinel is never a line terminator, so one-character lookahead at the end
    /// of a range cannot fabricate a line boundary.
    fn safe_char_at(&self, pos: usize) -> char;

    /// Line number containing character position `pos`.
    fn line_of(&self, pos: usize) -> usize;

    /// Style previously written at `pos`, [`StyleTag::Default`] if never written.
    fn style_at(&self, pos: usize) -> StyleTag;

    /// Reset the style cursor to `pos` before a styling pass.
    fn start_styling(&mut self, pos: usize);

    /// Style every position from the cursor through `end_pos` (inclusive) with `tag`,
    /// then move the cursor past `end_pos`. A call that does not advance the cursor is
    /// a no-op.
    fn extend_style(&mut self, end_pos: usize, tag: StyleTag);

    /// Stored fold record for a line, [`FoldLevel::base`] if never written.
    fn fold_level(&self, line: usize) -> FoldLevel;

    /// Store the fold record for a line.
    fn set_fold_level(&mut self, line: usize, level: FoldLevel);

    /// Named integer configuration lookup, `default` when the name is unset.
    fn config_int(&self, name: &str, default: i32) -> i32;
}
