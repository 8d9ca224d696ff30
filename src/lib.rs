//! Contact Form Core - validation and outbound-message composition for a
//! small-business contact form.
//!
//! This library is the pure, stateless core behind a contact form whose
//! submissions are delivered through a WhatsApp deep link. The host
//! application (a web UI, a bot, a kiosk) reads raw field values, asks this
//! crate for a validation verdict per field, and on success asks it to render
//! the outbound message and the `wa.me` link to open.
//!
//! # Architecture
//!
//! - **models**: Data structures for form submissions
//! - **validation**: Per-field validators returning verdicts, never errors
//! - **compose**: Message template rendering and deep-link construction
//! - **config**: Recipient and endpoint configuration from environment variables
//! - **error**: Custom error types for configuration loading
//! - **observability**: Logging initialization for hosts without a subscriber
//!
//! Every core operation is a pure function of its inputs: no shared state, no
//! I/O, no panics. Opening the link, displaying feedback, and resetting the
//! form all belong to the host.

// Re-export commonly used types
pub mod compose;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod validation;

pub use compose::{build_deep_link, build_deep_link_from_config, compose_message};
pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use models::{ContactFormData, DeliveryOption};
pub use validation::{validate_form, validate_name, validate_phone, FormVerdict, ValidationResult};
