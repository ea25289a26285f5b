use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored contact-form entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

/// Incoming contact-form payload, before the arrival stamp.
/// Unknown fields in the request body are dropped on deserialization.
#[derive(Debug, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewSubmission {
    /// Reject blank fields and obviously malformed emails.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Required field is empty: name".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Required field is empty: email".to_string());
        }
        if !self.email.contains('@') {
            return Err("Invalid email format: email".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Required field is empty: message".to_string());
        }
        Ok(())
    }

    /// Stamp with the arrival time to produce the stored record.
    pub fn stamp(self, date: DateTime<Utc>) -> Submission {
        Submission {
            name: self.name,
            email: self.email,
            message: self.message,
            date,
        }
    }
}
