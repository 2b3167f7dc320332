//! MarginLab Core — margin engine, input parsing, classification, formatting.
//!
//! This crate contains everything below the view layer:
//! - Tolerant free-form amount parsing (never fails on user text)
//! - The margin engine: one arithmetic pass from raw inputs to derived values
//! - Presentation classification (negative margin, freight warning, pill tone)
//! - Currency/percent formatting with a placeholder for undefined metrics
//! - The one-line clipboard summary builder
//!
//! The crate is pure: no I/O, no terminal knowledge, no error paths. Any
//! text the user can type produces a displayable result.

pub mod classify;
pub mod engine;
pub mod format;
pub mod parse;
pub mod summary;

pub use classify::{freight_high, is_negative, pill_tone, PillTone, HIGH_MARGIN};
pub use engine::{compute, MarginResult, RawInputs};
pub use format::{currency, percent, PLACEHOLDER};
pub use parse::parse_amount;
pub use summary::summary_line;
