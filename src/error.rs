// src/error.rs
//! Generation error taxonomy.

/// Failure raised while generating placements. All variants abort the
/// enclosing `generate` call with no partial-result salvage; a child
/// that merely does not fit is not an error.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    /// A weighted choice's cumulative probabilities never reached the
    /// sampled goal. Content must make probabilities sum to >= 100.
    #[error("Choices only reached sum {sum} out of goal {goal}.")]
    SchemaProbability { sum: f64, goal: f64 },

    #[error("no possibility registered under title '{0}'")]
    UnknownPossibility(String),

    /// Guard against schemas whose nesting never terminates.
    #[error("recursion limit of {depth} exceeded at possibility '{title}'")]
    RecursionLimit { title: String, depth: usize },
}
