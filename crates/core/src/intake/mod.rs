//! File intake validation.
//!
//! The resolver is the gate in front of everything else: a file must
//! resolve to a [`CanonicalType`](crate::formats::CanonicalType) here
//! before any output format can be offered or a conversion dispatched.

mod error;
mod resolver;
mod types;

pub use error::IntakeError;
pub use resolver::{resolve, DEFAULT_MAX_UPLOAD_BYTES};
pub use types::UploadedFile;
