//! The lexer capability pair and the language registry.
//!
//! A language binding is an explicit value implementing [`Lexer`], registered under a
//! language identifier at startup by whatever component owns editor language bindings.

use std::collections::HashMap;

use thiserror::Error;

use crate::accessor::DocumentAccess;

/// Errors produced by [`LexerRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A lexer is already registered under this language identifier.
    #[error("lexer for language `{0}` is already registered")]
    DuplicateLanguage(String),
}

/// The classify/fold capability pair for one language.
///
/// Both passes are total: malformed input degrades to valid styling and levels rather
/// than failing. The one precondition is the host's: `start` must be a line start
/// (re-scans realign by rewinding to the start of the edited line).
pub trait Lexer {
    /// Classify `[start, start + length)` and write style runs through the accessor.
    fn scan(&self, doc: &mut dyn DocumentAccess, start: usize, length: usize);

    /// Recompute fold levels for the lines covering `[start, start + length)`,
    /// persisting them through the accessor. Assumes `scan` already ran over the range.
    fn fold(&self, doc: &mut dyn DocumentAccess, start: usize, length: usize);
}

/// Language identifier → lexer table.
#[derive(Default)]
pub struct LexerRegistry {
    lexers: HashMap<String, Box<dyn Lexer>>,
}

impl LexerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            lexers: HashMap::new(),
        }
    }

    /// Register a lexer under a language identifier.
    pub fn register(
        &mut self,
        language: impl Into<String>,
        lexer: Box<dyn Lexer>,
    ) -> Result<(), RegistryError> {
        let language = language.into();
        if self.lexers.contains_key(&language) {
            return Err(RegistryError::DuplicateLanguage(language));
        }
        self.lexers.insert(language, lexer);
        Ok(())
    }

    /// Look up the lexer for a language identifier.
    pub fn get(&self, language: &str) -> Option<&dyn Lexer> {
        self.lexers.get(language).map(|lexer| &**lexer)
    }

    /// Whether a lexer is registered for a language identifier.
    pub fn contains(&self, language: &str) -> bool {
        self.lexers.contains_key(language)
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}
