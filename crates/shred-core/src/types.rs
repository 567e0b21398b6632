//! # Domain Types
//!
//! Catalog types used throughout Shred.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  Every entity = field set + audit record                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Exercise     │   │    Category     │   │     Muscle      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  code (Code)    │   │  code (Code)    │       │
//! │  │  name, cues ... │   │  name           │   │  name, group    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Apparatus     │   │    License      │   │  AuditRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (Code)    │   │  short_name     │   │  created_by     │       │
//! │  │  name           │   │  full_name, url │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   │  updated_at     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request vs Entity
//! - `*Request`: what a caller submits (field set + optional creator id)
//! - Entity: what the database holds (field set + audit record)
//!
//! ## Code Normalization
//! Code-keyed entities are addressed by an upper-cased [`Code`]. The newtype
//! upper-cases on construction *and* on deserialization, so `"strength"`,
//! `"Strength"` and `"STRENGTH"` all address the same row.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Code
// =============================================================================

/// A natural key for a code-keyed entity, always upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[ts(export)]
pub struct Code(String);

impl Code {
    /// Creates a code, normalizing it to upper case.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Code(raw.as_ref().to_uppercase())
    }

    /// Returns the normalized code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code, returning the normalized string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Code {
    fn from(raw: &str) -> Self {
        Code::new(raw)
    }
}

impl From<String> for Code {
    fn from(raw: String) -> Self {
        Code::new(raw)
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Code::new)
    }
}

// =============================================================================
// Audit Record
// =============================================================================

/// Who created a row and when it was created / last updated.
///
/// The timestamps are generated by the database, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditRecord {
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Category
// =============================================================================

/// Caller-supplied attributes of an exercise category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryFields {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "category_code"))]
    pub code: Code,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "category_name"))]
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "category_description"))]
    #[serde(default)]
    pub description: String,
}

/// Create/update payload for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryRequest {
    #[serde(flatten)]
    pub fields: CategoryFields,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
}

impl CategoryRequest {
    /// Creates a request without a creator id.
    pub fn new(code: impl Into<Code>, name: impl Into<String>, description: impl Into<String>) -> Self {
        CategoryRequest {
            fields: CategoryFields {
                code: code.into(),
                name: name.into(),
                description: description.into(),
            },
            created_by: None,
        }
    }

    /// Sets the creator id.
    pub fn created_by(mut self, user: Uuid) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// A persisted category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub fields: CategoryFields,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub audit: AuditRecord,
}

// =============================================================================
// Muscle
// =============================================================================

/// Caller-supplied attributes of a target muscle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MuscleFields {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "muscle_code"))]
    pub code: Code,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "muscle_name"))]
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "muscle_description"))]
    #[serde(default)]
    pub description: String,
    /// Body region the muscle belongs to (e.g. "Back", "Legs").
    #[cfg_attr(feature = "sqlx", sqlx(rename = "muscle_group"))]
    #[serde(default)]
    pub group: String,
}

/// Create/update payload for a muscle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MuscleRequest {
    #[serde(flatten)]
    pub fields: MuscleFields,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
}

impl MuscleRequest {
    /// Creates a request without a creator id.
    pub fn new(
        code: impl Into<Code>,
        name: impl Into<String>,
        description: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        MuscleRequest {
            fields: MuscleFields {
                code: code.into(),
                name: name.into(),
                description: description.into(),
                group: group.into(),
            },
            created_by: None,
        }
    }

    /// Sets the creator id.
    pub fn created_by(mut self, user: Uuid) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// A persisted muscle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Muscle {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub fields: MuscleFields,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub audit: AuditRecord,
}

// =============================================================================
// Apparatus
// =============================================================================

/// Caller-supplied attributes of a piece of apparatus (barbell, bench, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApparatusFields {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "apparatus_code"))]
    pub code: Code,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "apparatus_name"))]
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "apparatus_description"))]
    #[serde(default)]
    pub description: String,
}

/// Create/update payload for apparatus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApparatusRequest {
    #[serde(flatten)]
    pub fields: ApparatusFields,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
}

impl ApparatusRequest {
    /// Creates a request without a creator id.
    pub fn new(code: impl Into<Code>, name: impl Into<String>, description: impl Into<String>) -> Self {
        ApparatusRequest {
            fields: ApparatusFields {
                code: code.into(),
                name: name.into(),
                description: description.into(),
            },
            created_by: None,
        }
    }

    /// Sets the creator id.
    pub fn created_by(mut self, user: Uuid) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// A persisted piece of apparatus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Apparatus {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub fields: ApparatusFields,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub audit: AuditRecord,
}

// =============================================================================
// License
// =============================================================================

/// Caller-supplied attributes of a content license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LicenseFields {
    /// Short name, e.g. "CC0" or "CC-BY-SA-4.0". Upper-cased like any code.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "license_short_name"))]
    pub short_name: Code,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "license_full_name"))]
    pub full_name: String,
    #[serde(default)]
    pub url: String,
}

/// Create/update payload for a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LicenseRequest {
    #[serde(flatten)]
    pub fields: LicenseFields,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
}

impl LicenseRequest {
    /// Creates a request without a creator id.
    pub fn new(short_name: impl Into<Code>, full_name: impl Into<String>, url: impl Into<String>) -> Self {
        LicenseRequest {
            fields: LicenseFields {
                short_name: short_name.into(),
                full_name: full_name.into(),
                url: url.into(),
            },
            created_by: None,
        }
    }

    /// Sets the creator id.
    pub fn created_by(mut self, user: Uuid) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// A persisted license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct License {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub fields: LicenseFields,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub audit: AuditRecord,
}

// =============================================================================
// Exercise
// =============================================================================

/// Caller-supplied attributes of an exercise.
///
/// `category_code` and `license_short_name` are normalized like any other
/// code but are not checked against their tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExerciseFields {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "exercise_name"))]
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "exercise_description"))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    /// Coaching cues, e.g. "keep chest up; slow eccentric".
    #[serde(default)]
    pub cues: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category_code: Option<Code>,
    #[serde(default)]
    pub license_short_name: Option<Code>,
    #[serde(default)]
    pub license_author: Option<String>,
}

/// Create/update payload for an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExerciseRequest {
    #[serde(flatten)]
    pub fields: ExerciseFields,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_by: Option<Uuid>,
}

impl ExerciseRequest {
    /// Creates a request with only the required name set.
    pub fn named(name: impl Into<String>) -> Self {
        ExerciseRequest {
            fields: ExerciseFields {
                name: name.into(),
                ..ExerciseFields::default()
            },
            created_by: None,
        }
    }

    /// Sets the creator id.
    pub fn created_by(mut self, user: Uuid) -> Self {
        self.created_by = Some(user);
        self
    }
}

/// A persisted exercise, keyed by a generated UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Exercise {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "exercise_uuid"))]
    #[ts(as = "String")]
    pub id: Uuid,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub fields: ExerciseFields,
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub audit: AuditRecord,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_upper_cased() {
        assert_eq!(Code::new("strength"), "STRENGTH");
        assert_eq!(Code::new("StReNgTh"), Code::new("STRENGTH"));
        assert_eq!(Code::from("cc-by-4.0").as_str(), "CC-BY-4.0");
    }

    #[test]
    fn test_code_deserialization_normalizes() {
        let code: Code = serde_json::from_str("\"lat\"").unwrap();
        assert_eq!(code, "LAT");
    }

    #[test]
    fn test_code_serializes_as_plain_string() {
        let json = serde_json::to_string(&Code::new("cardio")).unwrap();
        assert_eq!(json, "\"CARDIO\"");
    }

    #[test]
    fn test_category_request_from_json() {
        let request: CategoryRequest = serde_json::from_str(
            r#"{"code":"strength","name":"Strength","description":"Strength training exercises"}"#,
        )
        .unwrap();

        assert_eq!(request.fields.code, "STRENGTH");
        assert_eq!(request.fields.name, "Strength");
        assert!(request.created_by.is_none());
    }

    #[test]
    fn test_exercise_request_optional_fields_default() {
        let request: ExerciseRequest =
            serde_json::from_str(r#"{"name":"Squat","categoryCode":"strength"}"#).unwrap();

        assert_eq!(request.fields.name, "Squat");
        assert_eq!(request.fields.category_code, Some(Code::new("STRENGTH")));
        assert!(request.fields.cues.is_none());
        assert!(request.fields.license_short_name.is_none());
    }

    #[test]
    fn test_entity_json_flattens_fields_and_audit() {
        let now = Utc::now();
        let muscle = Muscle {
            fields: MuscleRequest::new("lat", "Latissimus", "Muscle of the back", "Back").fields,
            audit: AuditRecord {
                created_by: None,
                created_at: now,
                updated_at: now,
            },
        };

        let value = serde_json::to_value(&muscle).unwrap();
        assert_eq!(value["code"], "LAT");
        assert_eq!(value["group"], "Back");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("fields").is_none());
    }
}
