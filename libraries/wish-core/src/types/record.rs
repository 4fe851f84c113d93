/// User record domain types
use crate::types::RecordId;
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A persisted submission: who, when they were born, and their photos.
///
/// Records are immutable once created; no operation updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique record identifier
    pub id: RecordId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Calendar date of birth
    pub date_of_birth: NaiveDate,

    /// Public URLs of the uploaded images, in submission order
    pub images: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a record from new-record fields, assigning an ID and timestamp
    ///
    /// The timestamp is kept to millisecond precision, which is what storage holds.
    pub fn create(new: NewRecord) -> Self {
        Self::with_id(RecordId::generate(), new, Utc::now().trunc_subsecs(3))
    }

    /// Create a record with a specific ID (for database loading)
    pub fn with_id(id: RecordId, new: NewRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            date_of_birth: new.date_of_birth,
            images: new.images,
            created_at,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields supplied when creating a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Calendar date of birth
    pub date_of_birth: NaiveDate,

    /// Public URLs of the uploaded images, in submission order
    pub images: Vec<String>,
}

impl NewRecord {
    /// Check the fields the store refuses to persist
    pub fn check(&self) -> crate::Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(crate::WishError::invalid_input("first name is empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(crate::WishError::invalid_input("last name is empty"));
        }
        if self.images.is_empty() {
            return Err(crate::WishError::invalid_input(
                "a record needs at least one image",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewRecord {
        NewRecord {
            first_name: "Ali".to_string(),
            last_name: "Khan".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 5, 10).unwrap(),
            images: vec!["https://blobs.example/a.jpg".to_string()],
        }
    }

    #[test]
    fn test_json_uses_camel_case() {
        let record = UserRecord::create(sample());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["firstName"], "Ali");
        assert_eq!(json["lastName"], "Khan");
        assert_eq!(json["dateOfBirth"], "2000-05-10");
        assert_eq!(json["images"][0], "https://blobs.example/a.jpg");
        assert!(json["createdAt"].is_string());
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_check_rejects_missing_images() {
        let mut new = sample();
        new.images.clear();
        assert!(new.check().is_err());
    }

    #[test]
    fn test_check_rejects_blank_names() {
        let mut new = sample();
        new.last_name = "  ".to_string();
        assert!(new.check().is_err());
        assert!(sample().check().is_ok());
    }
}
