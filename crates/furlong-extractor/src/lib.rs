//! Furlong Extractor
//!
//! Turns the text dump of a horse-racing past-performance sheet into one
//! structured record per entrant.
//!
//! # Overview
//!
//! PDF text extraction leaves no reliable delimiters: fields run together,
//! spacing is inconsistent and glyphs are mangled. Every stage therefore works
//! from positional and lexical heuristics and degrades to partial records
//! instead of failing.
//!
//! # Architecture
//!
//! ```text
//! PageSource → assemble → normalize → boundaries → slice → field extractors
//!                                                        → race-history parser
//! ```
//!
//! # Failure model
//!
//! - **Structural miss**: no entry markers, the whole text becomes one
//!   unattributed record
//! - **Field miss**: the field is `None` or empty
//! - **Row miss**: the race line is kept with whatever was recovered
//! - **Decode failure**: the only error, raised by [`CardParser::parse_source`]
//!
//! # Example Usage
//!
//! ```
//! use furlong_extractor::CardParser;
//! use furlong_domain::Post;
//!
//! let parser = CardParser::default();
//! let card = parser.parse("3  Fast Rocket (E 4) Own: J Smith Trnr: A Jones");
//!
//! let record = &card.records[0];
//! assert_eq!(record.post, Post::Assigned(3));
//! assert_eq!(record.name.as_deref(), Some("Fast Rocket"));
//! assert_eq!(record.connections.owner.as_deref(), Some("J Smith"));
//! ```

#![warn(missing_docs)]

mod boundary;
mod config;
mod cursor;
mod error;
mod fields;
mod history;
mod normalize;
mod parser;
mod slicer;
mod source;
mod times;
mod types;


pub use boundary::find_boundaries;
pub use config::ExtractorConfig;
pub use cursor::{RowCursor, Token};
pub use error::ExtractorError;
pub use fields::{FieldExtractors, Header};
pub use history::{is_surface_code, parse_race_history, split_remainder};
pub use normalize::{normalize, normalize_document};
pub use parser::CardParser;
pub use slicer::{slice, EntrySpan, Slices};
pub use source::assemble_text;
pub use times::{is_time_token, time_to_seconds};
pub use types::{ParseMetadata, ParsedCard};
