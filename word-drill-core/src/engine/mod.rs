//! Top-level module for the word-generation engine.
//!
//! The engine turns a character alphabet and numeric parameters into a
//! bounds-checked list of pseudo-random practice words:
//! - Settings data model and limits (`settings`)
//! - Submission validation (`validate`)
//! - Alphabet expansion into a sampling pool (`pool`)
//! - Word generation (`generator`)
//! - Column-wrapped output (`format`)
//!
//! The stages compose linearly: the validator gates the input, the pool
//! builder prepares the sampling source, the generator produces the
//! list, and the formatter renders it. Every call is synchronous,
//! stateless, and independent of previous calls.

/// Settings, limits, and the raw form representation of a submission.
pub mod settings;

/// Schema, type, and range validation of raw submissions.
pub mod validate;

/// Expansion of a small alphabet into a shuffled sampling buffer.
pub mod pool;

/// Word generation from a validated settings value.
pub mod generator;

/// Formatting of a word list into a flat or column-wrapped block.
pub mod format;
