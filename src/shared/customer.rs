//! Customer Data Structure
//!
//! Represents one tracked contact in the customer collection, together with
//! the body types exchanged over the `/customer` API.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "id": "0c6f2a8e-...",
//!   "name": "Acme",
//!   "date": "2024-01-01",
//!   "member": 5,
//!   "interest": "Widgets"
//! }
//! ```
//!
//! Create and update bodies use [`CustomerFields`], where every field is
//! optional. Create requires all of them, update merges whatever is present.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::CustomerError;

/// Opaque customer identifier, assigned by the store on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap an identifier received from a store or a request path
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a new record
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A stored customer record
///
/// Every stored record has all four data fields populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier, immutable after creation
    pub id: CustomerId,
    /// Customer name, used for list ordering
    pub name: String,
    /// Calendar date associated with the customer
    pub date: NaiveDate,
    /// Membership value, treated as an opaque number
    pub member: f64,
    /// What the customer is interested in
    pub interest: String,
}

impl Customer {
    /// Build a record from a complete draft and a freshly assigned id
    pub fn from_draft(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            member: draft.member,
            interest: draft.interest,
        }
    }

    /// Merge the present fields into this record
    ///
    /// Fields that are `None` keep their current value. The id never changes.
    pub fn apply(&mut self, fields: CustomerFields) {
        if let Some(name) = fields.name {
            self.name = name;
        }
        if let Some(date) = fields.date {
            self.date = date;
        }
        if let Some(member) = fields.member {
            self.member = member;
        }
        if let Some(interest) = fields.interest {
            self.interest = interest;
        }
    }

    /// Whether the data fields equal the given draft (id ignored)
    pub fn matches(&self, draft: &CustomerDraft) -> bool {
        self.name == draft.name
            && self.date == draft.date
            && self.member == draft.member
            && self.interest == draft.interest
    }
}

/// Sort records the way every `list_all` returns them
///
/// Ascending byte-wise by name, ties broken by id so the order is total.
pub fn sort_by_name(records: &mut [Customer]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

/// Request body for create and update
///
/// Unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
}

impl CustomerFields {
    /// Check that the present fields are acceptable values
    ///
    /// Blank text and non-finite numbers are rejected. Absent fields pass.
    pub fn validate_present(&self) -> Result<(), CustomerError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(member) = self.member {
            require_finite(member)?;
        }
        if let Some(interest) = &self.interest {
            require_text("interest", interest)?;
        }
        Ok(())
    }

    /// Turn the body into a complete draft, failing on the first absent field
    pub fn require(self) -> Result<CustomerDraft, CustomerError> {
        self.validate_present()?;

        let name = self.name.ok_or_else(|| CustomerError::missing("name"))?;
        let date = self.date.ok_or_else(|| CustomerError::missing("date"))?;
        let member = self.member.ok_or_else(|| CustomerError::missing("member"))?;
        let interest = self.interest.ok_or_else(|| CustomerError::missing("interest"))?;

        Ok(CustomerDraft {
            name,
            date,
            member,
            interest,
        })
    }
}

impl From<CustomerDraft> for CustomerFields {
    fn from(draft: CustomerDraft) -> Self {
        Self {
            name: Some(draft.name),
            date: Some(draft.date),
            member: Some(draft.member),
            interest: Some(draft.interest),
        }
    }
}

/// All data fields of a customer, validated, without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub date: NaiveDate,
    pub member: f64,
    pub interest: String,
}

fn require_text(field: &str, value: &str) -> Result<(), CustomerError> {
    if value.trim().is_empty() {
        return Err(CustomerError::missing(field));
    }
    Ok(())
}

fn require_finite(member: f64) -> Result<(), CustomerError> {
    if !member.is_finite() {
        return Err(CustomerError::validation("member", "member must be a finite number"));
    }
    Ok(())
}

/// Confirmation or error body carrying a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    /// Offending field, only set on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Confirmation returned by a successful delete
    pub fn deleted() -> Self {
        Self::new("Customer deleted")
    }
}
