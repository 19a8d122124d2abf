// src/lib.rs
//! Schema-driven recursive placement engine for seeding game worlds.
//!
//! A [`Seeder`] takes a library of named possibilities, declarative rules
//! for subdividing a rectangular region, and fills a starting
//! [`BoundingBox`] with a flat ordered list of [`Placement`]s for an
//! external spawner to instantiate. Placement is greedy and one-pass;
//! all randomness flows through an injected [`RandomSource`], so a seeded
//! source reproduces a world exactly.

pub mod chooser;
pub mod core;
pub mod error;
pub mod library;
pub mod random;
pub mod seeder;
pub mod spacing;

pub use crate::core::{
    Align, BoundingBox, ChildDef, Direction, FixedOrRandom, Placement, Possibility,
    PossibilityRef, PropertyMap, PropertyValue, ResultDef, Size, Spacing, SpacingRange, Weighted,
};
pub use crate::error::SeedError;
pub use crate::library::{LibraryLoadError, PossibilityLibrary};
pub use crate::random::{RandomSource, SeededRandom, SequenceRandom, SystemRandom};
pub use crate::seeder::{Seeder, SeederSettings};
