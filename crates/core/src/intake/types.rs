//! Types for the intake module.

use serde::{Deserialize, Serialize};

use crate::human_size::format_size;

/// A file handle as received from the upload surface.
///
/// Owned by the caller for the duration of one conversion attempt; the
/// core never retains it after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name as provided by the uploader.
    pub name: String,
    /// Content type declared by the upload surface. May be empty, in
    /// which case the resolver falls back to extension sniffing.
    #[serde(default)]
    pub declared_type: String,
    /// Size of the file in bytes.
    pub byte_size: u64,
}

impl UploadedFile {
    /// Human-readable size label, e.g. `"2.00 MB"`.
    pub fn size_label(&self) -> String {
        format_size(self.byte_size)
    }

    /// The file name's extension (lowercased, without the dot), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}
