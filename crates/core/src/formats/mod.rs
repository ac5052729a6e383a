//! Input type identifiers, output format tokens, and the static
//! compatibility table that ties them together.
//!
//! The table is the single source of truth for which conversions the
//! front end will offer: an input file must resolve to a [`CanonicalType`]
//! before any output format can be chosen, and the chosen [`OutputFormat`]
//! must appear in that type's [`FormatProfile::allowed_outputs`].

mod table;
mod types;

pub use table::{FormatProfile, FormatTable};
pub use types::{CanonicalType, OutputFormat};
