//! Data models for contact form submissions.

pub mod form;

pub use form::{ContactFormData, DeliveryOption};
