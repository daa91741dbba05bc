//! Pattern construction
//!
//! Builds the matcher used by the type check. A matcher is a character class
//! chosen by the field's semantic type, optionally widened with extra
//! characters, followed by a repetition clause and optional anchors. Date
//! fields use a fixed matcher instead.

pub mod builder;
pub mod spec;

pub use builder::{LengthRule, PatternBuilder};
pub use spec::{Anchors, DATE_PATTERN, DecimalBounds, MatchSpec, Repetition};

/// Error while compiling a built pattern
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Failed to compile pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
