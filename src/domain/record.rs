//! Normalized records for the operational tables.
//!
//! The storage layer cannot express every invariant, so writers go through
//! these types: a contact's full name is always derived from its trimmed
//! first and last names, and a deleted user is never active.

use crate::domain::catalog::{ABBREVIATION_LEN, DEFAULT_PAYMENT_TIER_ID};
use crate::error::ValidationError;

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Derive a full name from its parts.
#[must_use]
pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim())
}

/// Effective active flag after normalization.
#[must_use]
pub const fn effective_active(deleted: bool, active: bool) -> bool {
    active && !deleted
}

/// A US state row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewState {
    abbreviation: String,
    name: String,
}

impl NewState {
    /// # Errors
    /// Fails if the name is blank or the abbreviation is not two characters.
    pub fn new(abbreviation: &str, name: &str) -> Result<Self, ValidationError> {
        let abbreviation = required("abbreviation", abbreviation)?;
        let expected = usize::from(ABBREVIATION_LEN);
        let actual = abbreviation.chars().count();
        if actual != expected {
            return Err(ValidationError::Length {
                field: "abbreviation",
                expected,
                actual,
            });
        }
        Ok(Self {
            abbreviation,
            name: required("name", name)?,
        })
    }

    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A postal location. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLocation {
    pub address: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub state_id: Option<i32>,
}

/// A contact whose full name is derived on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email_address: String,
    phone_number: String,
    location_id: Option<i32>,
}

impl NewContact {
    /// # Errors
    /// Fails if any of the names, the email or the phone number is blank.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email_address: &str,
        phone_number: &str,
        location_id: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: required("first_name", first_name)?,
            last_name: required("last_name", last_name)?,
            email_address: required("email_address", email_address)?,
            phone_number: required("phone_number", phone_number)?,
            location_id,
        })
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[must_use]
    pub const fn location_id(&self) -> Option<i32> {
        self.location_id
    }
}

/// Hardware a user signs in from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    name: String,
    device_type: String,
    os: String,
    os_version: String,
    model: String,
}

impl NewDevice {
    /// # Errors
    /// Fails if any field is blank.
    pub fn new(
        name: &str,
        device_type: &str,
        os: &str,
        os_version: &str,
        model: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name)?,
            device_type: required("type", device_type)?,
            os: required("os", os)?,
            os_version: required("os_version", os_version)?,
            model: required("model", model)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    #[must_use]
    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// A user account.
///
/// Active by default on the first payment tier. Marking it deleted
/// deactivates it, and a deleted user cannot be reactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
    role_type_id: i32,
    payment_tier_type_id: i32,
    contact_id: Option<i32>,
    device_id: Option<i32>,
    active: bool,
    deleted: bool,
}

impl NewUser {
    /// # Errors
    /// Fails if the username or email is blank.
    pub fn new(username: &str, email: &str, role_type_id: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            username: required("username", username)?,
            email: required("email", email)?,
            role_type_id,
            payment_tier_type_id: DEFAULT_PAYMENT_TIER_ID,
            contact_id: None,
            device_id: None,
            active: true,
            deleted: false,
        })
    }

    #[must_use]
    pub fn with_payment_tier(mut self, id: i32) -> Self {
        self.payment_tier_type_id = id;
        self
    }

    #[must_use]
    pub fn with_contact(mut self, id: i32) -> Self {
        self.contact_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_device(mut self, id: i32) -> Self {
        self.device_id = Some(id);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Shorthand for `deleted(true)`.
    #[must_use]
    pub fn mark_deleted(self) -> Self {
        self.deleted(true)
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn role_type_id(&self) -> i32 {
        self.role_type_id
    }

    #[must_use]
    pub const fn payment_tier_type_id(&self) -> i32 {
        self.payment_tier_type_id
    }

    #[must_use]
    pub const fn contact_id(&self) -> Option<i32> {
        self.contact_id
    }

    #[must_use]
    pub const fn device_id(&self) -> Option<i32> {
        self.device_id
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        effective_active(self.deleted, self.active)
    }
}
