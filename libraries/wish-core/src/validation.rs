//! Submission validation
//!
//! Runs before anything leaves the form: required names, a birth date, and at
//! least one image. Each failing field gets exactly one message, and every
//! failing field is reported at once.

use crate::error::{Result, WishError};
use crate::types::ImageFile;
use chrono::{DateTime, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Submission fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Birth date
    DateOfBirth,
    /// Image files
    Images,
}

impl Field {
    /// Form field name as sent by clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfBirth => "dateOfBirth",
            Field::Images => "images",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::DateOfBirth => "Date of birth is required",
            Field::Images => "At least one image is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → message for every rule that failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Message for `field`, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// True if `field` failed
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// True if nothing failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields and their messages, in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, msg) in &self.0 {
            map.serialize_entry(field.as_str(), msg)?;
        }
        map.end()
    }
}

impl From<FieldErrors> for WishError {
    fn from(errors: FieldErrors) -> Self {
        WishError::invalid_input(errors.to_string())
    }
}

/// Raw submission as collected from a form
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    /// Given name as typed
    pub first_name: String,
    /// Family name as typed
    pub last_name: String,
    /// Birth date as typed
    pub date_of_birth: String,
    /// Image files, in submission order
    pub images: Vec<ImageFile>,
}

/// A submission that passed every rule
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    /// Trimmed, non-empty given name
    pub first_name: String,
    /// Trimmed, non-empty family name
    pub last_name: String,
    /// Trimmed, non-empty birth date, not yet parsed
    pub date_of_birth: String,
    /// At least one image, in submission order
    pub images: Vec<ImageFile>,
}

/// Check a submission against the required-field rules.
///
/// Names and the birth date are trimmed; whitespace-only values count as missing.
pub fn validate(input: SubmissionInput) -> std::result::Result<ValidSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let first_name = input.first_name.trim().to_string();
    let last_name = input.last_name.trim().to_string();
    let date_of_birth = input.date_of_birth.trim().to_string();

    for (field, value) in [
        (Field::FirstName, &first_name),
        (Field::LastName, &last_name),
        (Field::DateOfBirth, &date_of_birth),
    ] {
        if value.is_empty() {
            errors.insert(field, field.required_message());
        }
    }

    if input.images.is_empty() {
        errors.insert(Field::Images, Field::Images.required_message());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        first_name,
        last_name,
        date_of_birth,
        images: input.images,
    })
}

/// Parse a birth date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| WishError::invalid_input(format!("invalid date of birth: {:?}", value)))
}
