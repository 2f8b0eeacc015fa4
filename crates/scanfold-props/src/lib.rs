//! `scanfold-props` - incremental properties/INF lexing and folding for `scanfold-core`.
//!
//! A line-oriented lexer for section/key-value structured text: `[section]` headers,
//! `key=value` / `key:value` assignments, `#`/`!`/`;` comment lines, and `@`-prefixed
//! default-value lines. Two independent passes run over any sub-range of a document:
//!
//! - [`scan`] classifies each physical line into style runs and writes them back
//!   through the host's [`DocumentAccess`] capability;
//! - [`fold_levels`] re-walks the styled range and persists a per-line
//!   [`FoldLevel`](scanfold_core::FoldLevel), nesting lines under `[section]` headers.
//!
//! Both passes are total (malformed input degrades to valid output) and hold no state
//! across calls, so a host can re-scan just the lines near an edit. The one
//! precondition is that a scanned range starts at a line boundary.

mod classify;
mod fold;
mod scan;

pub use classify::{classify_line, is_assign_char, is_comment_leader, is_space_or_tab};
pub use fold::fold_levels;
pub use scan::scan;

use scanfold_core::{DocumentAccess, Lexer, LexerRegistry, RegistryError};

/// Language identifier the lexer registers under.
pub const LANGUAGE_ID: &str = "props";

/// Config name: allow lines to start with whitespace and still be classified.
///
/// Set to 0 for documents where indentation is structurally meaningful (continuation
/// lines); indented lines then style as `Default` wholesale. Defaults to 1.
pub const ALLOW_INITIAL_SPACES: &str = "props.allow.initial.spaces";

/// Config name: mark whitespace-only lines with the blank fold flag so hosts can hide
/// them inside the enclosing fold. Defaults to 1.
pub const FOLD_COMPACT: &str = "fold.compact";

/// The properties/INF lexer as a registrable capability pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropsLexer;

impl Lexer for PropsLexer {
    fn scan(&self, doc: &mut dyn DocumentAccess, start: usize, length: usize) {
        scan(doc, start, length);
    }

    fn fold(&self, doc: &mut dyn DocumentAccess, start: usize, length: usize) {
        fold_levels(doc, start, length);
    }
}

/// Register the lexer under [`LANGUAGE_ID`].
pub fn register(registry: &mut LexerRegistry) -> Result<(), RegistryError> {
    registry.register(LANGUAGE_ID, Box::new(PropsLexer))
}
