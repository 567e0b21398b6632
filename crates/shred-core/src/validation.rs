//! # Validation Module
//!
//! Input validation for catalog requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (serde)                                        │
//! │  ├── Missing / mistyped fields                                         │
//! │  └── Code normalization (upper-case)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields non-empty                                         │
//! │  └── Length and format limits                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY uniqueness                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shred_core::validation::Validate;
//! use shred_core::CategoryRequest;
//!
//! let request = CategoryRequest::new("strength", "Strength", "Strength training");
//! assert!(request.validate().is_ok());
//!
//! let request = CategoryRequest::new("", "Strength", "");
//! assert!(request.validate().is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{
    ApparatusRequest, CategoryRequest, Code, ExerciseRequest, LicenseRequest, MuscleRequest,
};
use crate::{MAX_CODE_LENGTH, MAX_NAME_LENGTH, MAX_TEXT_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A request that can be checked before it reaches the database.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a code (category, muscle, apparatus code or license short name).
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_CODE_LENGTH`] characters
/// - Only letters, digits, `-`, `_` and `.`
///
/// ## Example
/// ```rust
/// use shred_core::{validation::validate_code, Code};
///
/// assert!(validate_code("code", &Code::new("cc-by-4.0")).is_ok());
/// assert!(validate_code("code", &Code::new("two words")).is_err());
/// ```
pub fn validate_code(field: &str, code: &Code) -> ValidationResult<()> {
    let code = code.as_str();

    if code.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    if code.chars().count() > MAX_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_CODE_LENGTH,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, '-', '_' and '.'".to_string(),
        });
    }

    Ok(())
}

/// Validates a required display name.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    validate_length(field, name, MAX_NAME_LENGTH)
}

/// Validates free text (descriptions, cues, instructions). Empty is fine.
pub fn validate_text(field: &str, text: &str) -> ValidationResult<()> {
    validate_length(field, text, MAX_TEXT_LENGTH)
}

/// Validates a URL if one was given. Empty means "no URL".
pub fn validate_url(field: &str, url: &str) -> ValidationResult<()> {
    if url.is_empty() {
        return Ok(());
    }

    validate_length(field, url, MAX_TEXT_LENGTH)?;

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional code reference. Omit the field (or send `null`)
/// for "no reference"; an empty string is not accepted as one.
fn validate_reference(field: &str, code: &Code) -> ValidationResult<()> {
    if code.as_str().trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    validate_code(field, code)
}

fn validate_length(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Checks that the key named in a request path agrees with the request body.
///
/// ## Example
/// ```rust
/// use shred_core::{validation::ensure_same_code, Code};
///
/// assert!(ensure_same_code("code", &Code::new("cc0"), &Code::new("CC0")).is_ok());
/// assert!(ensure_same_code("code", &Code::new("cc0"), &Code::new("MIT")).is_err());
/// ```
pub fn ensure_same_code(field: &str, path: &Code, body: &Code) -> ValidationResult<()> {
    if path != body {
        return Err(ValidationError::Mismatch {
            field: field.to_string(),
            path: path.to_string(),
            body: body.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Request Validation
// =============================================================================

impl Validate for CategoryRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_code("code", &self.fields.code)?;
        validate_name("name", &self.fields.name)?;
        validate_text("description", &self.fields.description)
    }
}

impl Validate for MuscleRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_code("code", &self.fields.code)?;
        validate_name("name", &self.fields.name)?;
        validate_text("description", &self.fields.description)?;
        validate_text("group", &self.fields.group)
    }
}

impl Validate for ApparatusRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_code("code", &self.fields.code)?;
        validate_name("name", &self.fields.name)?;
        validate_text("description", &self.fields.description)
    }
}

impl Validate for LicenseRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_code("shortName", &self.fields.short_name)?;
        validate_name("fullName", &self.fields.full_name)?;
        validate_url("url", &self.fields.url)
    }
}

impl Validate for ExerciseRequest {
    fn validate(&self) -> ValidationResult<()> {
        let fields = &self.fields;

        validate_name("name", &fields.name)?;

        let texts = [
            ("description", &fields.description),
            ("instructions", &fields.instructions),
            ("cues", &fields.cues),
            ("licenseAuthor", &fields.license_author),
        ];
        for (field, value) in texts {
            if let Some(value) = value {
                validate_text(field, value)?;
            }
        }

        if let Some(url) = &fields.video_url {
            validate_url("videoUrl", url)?;
        }
        if let Some(code) = &fields.category_code {
            validate_reference("categoryCode", code)?;
        }
        if let Some(code) = &fields.license_short_name {
            validate_reference("licenseShortName", code)?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("code", &Code::new("STRENGTH")).is_ok());
        assert!(validate_code("code", &Code::new("cc-by-sa-4.0")).is_ok());
        assert!(validate_code("code", &Code::new("snake_case")).is_ok());

        assert_eq!(
            validate_code("code", &Code::new("")),
            Err(ValidationError::required("code"))
        );
        assert!(matches!(
            validate_code("code", &Code::new("A".repeat(MAX_CODE_LENGTH + 1))),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(matches!(
            validate_code("code", &Code::new("no spaces")),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Strength").is_ok());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url", "").is_ok());
        assert!(validate_url("url", "https://creativecommons.org/publicdomain/zero/1.0/").is_ok());
        assert!(matches!(
            validate_url("url", "creativecommons.org"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_category_request_validation() {
        let ok = CategoryRequest::new("strength", "Strength", "Strength training exercises");
        assert!(ok.validate().is_ok());

        let missing_name = CategoryRequest::new("strength", "", "");
        assert_eq!(
            missing_name.validate(),
            Err(ValidationError::required("name"))
        );
    }

    #[test]
    fn test_license_request_validation() {
        let ok = LicenseRequest::new(
            "CC0",
            "Creative Commons Public Domain 1.0",
            "https://creativecommons.org/publicdomain/zero/1.0/",
        );
        assert!(ok.validate().is_ok());

        let bad_url = LicenseRequest::new("CC0", "Creative Commons", "ftp://example.org");
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_exercise_request_validation() {
        assert!(ExerciseRequest::named("Squat").validate().is_ok());
        assert_eq!(
            ExerciseRequest::named(" ").validate(),
            Err(ValidationError::required("name"))
        );

        let mut request = ExerciseRequest::named("Squat");
        request.fields.video_url = Some("youtube.com/watch".to_string());
        assert!(request.validate().is_err());

        let mut request = ExerciseRequest::named("Squat");
        request.fields.category_code = Some(Code::new("bad code"));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_muscle_group_is_free_text() {
        let with_group = |len: usize| MuscleRequest::new("lat", "Latissimus", "", "g".repeat(len));

        assert!(with_group(MAX_NAME_LENGTH + 1).validate().is_ok());
        assert!(with_group(MAX_TEXT_LENGTH).validate().is_ok());
        assert_eq!(
            with_group(MAX_TEXT_LENGTH + 1).validate(),
            Err(ValidationError::TooLong {
                field: "group".to_string(),
                max: MAX_TEXT_LENGTH,
            })
        );
    }

    #[test]
    fn test_empty_reference_code_is_invalid_not_missing() {
        let mut request = ExerciseRequest::named("Squat");
        request.fields.category_code = Some(Code::new(""));

        let err = request.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "categoryCode".to_string(),
                reason: "must not be empty".to_string(),
            }
        );
        assert_eq!(err.to_string(), "categoryCode has invalid format: must not be empty");

        // Omitting the reference is fine
        request.fields.category_code = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_ensure_same_code() {
        assert!(ensure_same_code("code", &Code::new("lat"), &Code::new("LAT")).is_ok());
        assert!(matches!(
            ensure_same_code("code", &Code::new("lat"), &Code::new("pec")),
            Err(ValidationError::Mismatch { .. })
        ));
    }
}
