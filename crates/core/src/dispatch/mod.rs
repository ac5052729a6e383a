//! Conversion request dispatch.
//!
//! The dispatcher is the only component that performs I/O: it packages a
//! validated upload as a multipart body and issues exactly one outbound
//! request to the remote conversion engine, yielding a downloadable
//! result handle or a failure. Format compatibility is re-validated here
//! and violations fail fast, before any network traffic.

mod error;
mod http;
mod traits;
mod types;

pub use error::DispatchError;
pub use http::HttpEngine;
pub use traits::ConversionEngine;
pub use types::{output_file_name, ConversionRequest, DownloadHandle, Quality};
