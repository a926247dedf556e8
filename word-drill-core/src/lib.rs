//! Typing-practice word generation library.
//!
//! This crate provides the engine behind a typing-drill word list:
//! - Bounds-checked settings validation with logged diagnostics
//! - Pseudo-random word generation from a user-supplied alphabet
//! - Column-wrapped formatting of the generated list
//!
//! The presentation layer (form, clipboard, notifications) lives with
//! the caller; this crate only takes a settings submission and hands
//! back words.

/// Validation, generation, and formatting stages of the engine.
pub mod engine;
