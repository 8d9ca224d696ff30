//! Form submission model: one snapshot of the contact form's fields.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How the customer wants to receive their order.
///
/// Form controls submit this as a raw string. Parsing is deliberately lenient:
/// `"pickup"` selects [`DeliveryOption::Pickup`] and every other value,
/// recognized or not, falls through to [`DeliveryOption::Delivery`]. This
/// matches the form's historical behavior, where delivery is the pre-selected
/// default and unknown values were never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// Customer picks the order up in store
    Pickup,

    /// Order is delivered to the customer's address
    #[default]
    Delivery,
}

impl DeliveryOption {
    /// Parse a raw form value. Never fails; unknown values mean delivery.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "pickup" {
            DeliveryOption::Pickup
        } else {
            DeliveryOption::Delivery
        }
    }

    /// Human-readable label used in the composed message.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "Pickup in store",
            DeliveryOption::Delivery => "Home delivery",
        }
    }
}

// Deserialize with the same lenient parse the form uses, rather than rejecting
// unknown variants the way a derived impl would.
impl<'de> Deserialize<'de> for DeliveryOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(DeliveryOption::from_raw(&raw))
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single contact form submission, exactly as entered by the user.
///
/// Built fresh from current UI state on every submission attempt and never
/// persisted. Fields carry raw user input: no pre-trimming is required, the
/// validators and the composer each perform their own normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactFormData {
    /// Name as typed into the form
    pub name: String,

    /// Phone as typed into the form (may contain spaces, dashes, parentheses)
    pub phone: String,

    /// Selected delivery mode
    pub delivery_option: DeliveryOption,

    /// Free-text note, may be empty
    pub note: String,
}

impl ContactFormData {
    /// Build a submission from raw form control values.
    pub fn from_raw(name: &str, phone: &str, delivery_option: &str, note: &str) -> Self {
        ContactFormData {
            name: name.to_string(),
            phone: phone.to_string(),
            delivery_option: DeliveryOption::from_raw(delivery_option),
            note: note.to_string(),
        }
    }
}
