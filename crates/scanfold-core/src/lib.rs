#![warn(missing_docs)]
//! Scanfold Core - host capability and shared primitives for incremental lexing.
//!
//! # Overview
//!
//! `scanfold-core` is the host-facing half of a small incremental lexing engine for
//! line-oriented documents. It owns the vocabulary shared between a text-editor host and
//! a language engine:
//!
//! - **Document capability**: the [`DocumentAccess`] trait, implemented by the host
//!   document. It exposes random-access character reads, bounds-safe lookahead, line
//!   lookup, style read/write, per-line fold-level storage, and named configuration
//!   lookups. Language engines are written against this trait only.
//! - **Style primitives**: [`StyleTag`] (the closed tag set) and [`StyleRun`]
//!   (a half-open styled range).
//! - **Fold primitives**: [`FoldLevel`], an explicit per-line record of fold nesting
//!   with header/blank flags. There is no bit packing in the contract; hosts that store
//!   levels packed do the conversion at their own boundary.
//! - **Registry**: [`LexerRegistry`], mapping a language identifier to a value
//!   implementing the [`Lexer`] capability pair (style pass + fold pass). Constructed at
//!   startup by whatever component owns editor language bindings.
//! - **Reference host**: [`MemoryDocument`], a rope-backed in-memory document
//!   implementing [`DocumentAccess`], suitable for hosts without their own storage and
//!   for tests, examples and benchmarks.
//!
//! # Quick Start
//!
//! ```rust
//! use scanfold_core::{DocumentAccess, MemoryDocument, StyleTag};
//!
//! let mut doc = MemoryDocument::from_text("alpha\nbeta\n");
//!
//! // A language engine writes styles through the extend primitive.
//! doc.start_styling(0);
//! doc.extend_style(4, StyleTag::Key);
//! doc.extend_style(10, StyleTag::Default);
//!
//! let runs = doc.style_runs(0, 5);
//! assert_eq!(runs[0].tag, StyleTag::Key);
//! assert_eq!((runs[0].start, runs[0].end), (0, 5));
//! ```
//!
//! # Module Description
//!
//! - [`accessor`] - the [`DocumentAccess`] capability trait
//! - [`styles`] - style tags and style runs
//! - [`fold`] - per-line fold-level records
//! - [`registry`] - the lexer capability pair and the language registry
//! - [`document`] - the rope-backed reference document

pub mod accessor;
pub mod document;
pub mod fold;
pub mod registry;
pub mod styles;

pub use accessor::DocumentAccess;
pub use document::MemoryDocument;
pub use fold::FoldLevel;
pub use registry::{Lexer, LexerRegistry, RegistryError};
pub use styles::{StyleRun, StyleTag};
