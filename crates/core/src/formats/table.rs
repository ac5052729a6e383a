//! The static format compatibility table.

use serde::Serialize;

use super::types::{CanonicalType, OutputFormat};

/// Display and compatibility data for one canonical input type.
///
/// Exactly one profile exists per [`CanonicalType`]; the mapping is fixed
/// for the process lifetime. `allowed_outputs` is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct FormatProfile {
    /// Icon shown next to the resolved file.
    pub icon: &'static str,
    /// Human-readable description of the input type.
    pub description: &'static str,
    /// Legal conversion targets, in presentation order.
    pub allowed_outputs: &'static [OutputFormat],
}

static JPEG: FormatProfile = FormatProfile {
    icon: "🖼️",
    description: "JPEG Image",
    allowed_outputs: &[
        OutputFormat::Pdf,
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Gif,
    ],
};

static PNG: FormatProfile = FormatProfile {
    icon: "🖼️",
    description: "PNG Image",
    allowed_outputs: &[OutputFormat::Pdf, OutputFormat::Jpg, OutputFormat::Gif],
};

static GIF: FormatProfile = FormatProfile {
    icon: "🎭",
    description: "GIF Animation",
    allowed_outputs: &[OutputFormat::Jpg, OutputFormat::Png, OutputFormat::Pdf],
};

static SVG: FormatProfile = FormatProfile {
    icon: "📐",
    description: "SVG Vector",
    allowed_outputs: &[OutputFormat::Png, OutputFormat::Jpg, OutputFormat::Pdf],
};

static PDF: FormatProfile = FormatProfile {
    icon: "📄",
    description: "PDF Document",
    allowed_outputs: &[OutputFormat::Docx, OutputFormat::Jpg, OutputFormat::Png],
};

static DOC: FormatProfile = FormatProfile {
    icon: "📝",
    description: "Word Document",
    allowed_outputs: &[OutputFormat::Pdf, OutputFormat::Docx],
};

static DOCX: FormatProfile = FormatProfile {
    icon: "📝",
    description: "Word Document",
    allowed_outputs: &[OutputFormat::Pdf],
};

/// Read-only lookup into the compatibility table.
pub struct FormatTable;

impl FormatTable {
    /// Every canonical type known to the table, in presentation order.
    pub const TYPES: [CanonicalType; 7] = [
        CanonicalType::Pdf,
        CanonicalType::Doc,
        CanonicalType::Docx,
        CanonicalType::Jpeg,
        CanonicalType::Png,
        CanonicalType::Gif,
        CanonicalType::Svg,
    ];

    /// Returns the profile for a canonical type.
    ///
    /// Total by construction: the key set of the table is exactly the
    /// [`CanonicalType`] enum.
    pub fn lookup(ty: CanonicalType) -> &'static FormatProfile {
        match ty {
            CanonicalType::Jpeg => &JPEG,
            CanonicalType::Png => &PNG,
            CanonicalType::Gif => &GIF,
            CanonicalType::Svg => &SVG,
            CanonicalType::Pdf => &PDF,
            CanonicalType::Doc => &DOC,
            CanonicalType::Docx => &DOCX,
        }
    }

    /// Looks up a raw MIME string. `None` means the type is outside the
    /// table's key set, which is distinct from an empty allowed-outputs
    /// list (the latter would be a table bug).
    pub fn lookup_mime(mime: &str) -> Option<(CanonicalType, &'static FormatProfile)> {
        CanonicalType::from_mime(mime).map(|ty| (ty, Self::lookup(ty)))
    }

    /// Iterates over every (type, profile) entry.
    pub fn entries() -> impl Iterator<Item = (CanonicalType, &'static FormatProfile)> {
        Self::TYPES.iter().map(|&ty| (ty, Self::lookup(ty)))
    }

    /// Whether `output` is a legal conversion target for `input`.
    pub fn is_allowed(input: CanonicalType, output: OutputFormat) -> bool {
        Self::lookup(input).allowed_outputs.contains(&output)
    }
}
