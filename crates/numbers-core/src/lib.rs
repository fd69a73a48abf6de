//! Number formatting for steno outlines.
//!
//! A number outline is a short sequence of strokes such as `["12", "3KR"]`.
//! Digits are written as they are stroked and control keys decorate them:
//! currency, percent, clock times, ordinals, roman numerals, and words.

mod decorate;
pub mod digits;
pub mod lookup;
pub mod roman;
pub mod settings;
pub mod stroke;
pub mod words;

pub use lookup::{lookup, lookup_with, LookupError, NotFoundReason};
