//! Furlong Domain Layer
//!
//! This crate holds the data model produced by the past-performance extraction
//! pipeline and the trait seams for the collaborators that live outside it.
//! It carries no parsing logic; everything here is a plain value type.
//!
//! ## Key Concepts
//!
//! - **RawDocument**: the normalized text stream a parse works on
//! - **EntryBoundary**: where one entrant's data begins inside that stream
//! - **EntrantRecord**: everything recovered for one horse, every field optional
//!   except its post and the raw span it came from
//! - **RaceLine**: one row of an entrant's race history, partially filled when
//!   the row could only be partly decomposed
//!
//! ## Absence
//!
//! A field the extractors could not find is `None` (or an empty collection).
//! Nothing in this model is ever filled with a guessed default.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod entrant;
pub mod race_line;
pub mod traits;

// Re-exports for convenience
pub use document::{EntryBoundary, RawDocument, MAX_POST, MIN_POST};
pub use entrant::{
    AggregateStats, Connections, EntrantRecord, JockeyRecord, Pedigree, Post, Sex, SurfaceRecord,
    YearSummary,
};
pub use race_line::{Calls, RaceLine};
pub use traits::{JockeyRatings, PageSource};
