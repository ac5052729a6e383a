//! The type resolver: size gate plus MIME resolution.

use crate::formats::CanonicalType;

use super::error::IntakeError;
use super::types::UploadedFile;

/// Default upload size ceiling: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Resolves an uploaded file to its canonical type.
///
/// The size ceiling is checked before any type lookup. A non-empty
/// declared content type takes precedence over the file extension; the
/// extension lookup is case-insensitive. Pure over its inputs and the
/// static table, so repeated calls on the same handle yield the same
/// outcome.
pub fn resolve(file: &UploadedFile, max_upload_bytes: u64) -> Result<CanonicalType, IntakeError> {
    if file.byte_size > max_upload_bytes {
        return Err(IntakeError::FileTooLarge {
            byte_size: file.byte_size,
            limit_bytes: max_upload_bytes,
        });
    }

    if !file.declared_type.is_empty() {
        return CanonicalType::from_mime(&file.declared_type).ok_or_else(|| {
            IntakeError::UnsupportedType {
                detail: file.declared_type.clone(),
            }
        });
    }

    match file.extension() {
        Some(ext) => {
            CanonicalType::from_extension(&ext).ok_or_else(|| IntakeError::UnsupportedType {
                detail: format!(".{}", ext),
            })
        }
        None => Err(IntakeError::UnsupportedType {
            detail: file.name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, declared_type: &str, byte_size: u64) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            byte_size,
        }
    }

    #[test]
    fn test_resolve_by_extension() {
        let f = file("report.pdf", "", 2 * 1024 * 1024);
        assert_eq!(
            resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap(),
            CanonicalType::Pdf
        );
    }

    #[test]
    fn test_resolve_extension_case_insensitive() {
        let f = file("SCAN.JPEG", "", 1024);
        assert_eq!(
            resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap(),
            CanonicalType::Jpeg
        );
    }

    #[test]
    fn test_declared_type_takes_precedence() {
        // Extension says PDF, but the upload surface declared PNG.
        let f = file("report.pdf", "image/png", 1024);
        assert_eq!(
            resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap(),
            CanonicalType::Png
        );
    }

    #[test]
    fn test_unknown_declared_type_fails() {
        let f = file("archive.pdf", "application/zip", 1024);
        let err = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let f = file("archive.zip", "", 1024);
        let err = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_no_extension_fails() {
        let f = file("archive", "", 1024);
        let err = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_size_ceiling_checked_before_type() {
        // Valid PDF name, but over the ceiling: must fail with
        // FileTooLarge regardless of name or declared type.
        let f = file("report.pdf", "application/pdf", 150 * 1024 * 1024);
        let err = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, IntakeError::FileTooLarge { .. }));

        let f = file("whatever.zip", "not-a-type", 150 * 1024 * 1024);
        let err = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::FileTooLarge {
                byte_size: 157_286_400,
                limit_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            }
        ));
    }

    #[test]
    fn test_size_exactly_at_ceiling_passes() {
        let f = file("report.pdf", "", DEFAULT_MAX_UPLOAD_BYTES);
        assert!(resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let f = file("photo.jpeg", "image/jpeg", 5 * 1024 * 1024);
        let first = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap();
        let second = resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).unwrap();
        assert_eq!(first, second);

        let bad = file("archive.zip", "", 1024);
        let first = resolve(&bad, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        let second = resolve(&bad, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(first.reason_label(), second.reason_label());
    }

    #[test]
    fn test_custom_ceiling() {
        let f = file("report.pdf", "", 11 * 1024 * 1024);
        assert!(resolve(&f, 10 * 1024 * 1024).is_err());
        assert!(resolve(&f, DEFAULT_MAX_UPLOAD_BYTES).is_ok());
    }
}
