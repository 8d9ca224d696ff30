//! Outbound message rendering and deep-link construction.
//!
//! [`compose_message`] turns a validated submission into the fixed-template
//! text the business receives; [`build_deep_link`] wraps that text into a
//! WhatsApp `wa.me` URL the host opens in a new browsing context. Both are
//! pure: no network, no DOM, no state.
//!
//! The host must only compose after [`validate_form`](crate::validation::validate_form)
//! reports success; the composer itself does not re-validate.

use crate::config::Config;
use crate::models::ContactFormData;

/// Render the outbound message for a submission.
///
/// The template is fixed, in this order: a greeting naming the sender, the
/// phone line, the delivery-mode label, an optional note section, and a
/// closing line. Lines are joined with `\n`.
///
/// The note section appears only when the note is non-empty after trimming,
/// but the note text itself is included untrimmed, exactly as typed.
///
/// Total and deterministic: identical input always yields identical output.
///
/// # Example
///
/// ```
/// use contact_form_core::{compose_message, ContactFormData};
///
/// let data = ContactFormData::from_raw("Ana", "12345678", "pickup", "");
/// let msg = compose_message(&data);
/// assert!(msg.starts_with("Hello! I'm Ana\n"));
/// assert!(msg.contains("Pickup in store"));
/// ```
pub fn compose_message(data: &ContactFormData) -> String {
    let mut lines = vec![
        format!("Hello! I'm {}", data.name),
        format!("My phone: {}", data.phone),
        data.delivery_option.label().to_string(),
    ];

    if !data.note.trim().is_empty() {
        lines.push(String::new());
        lines.push(format!("Message: {}", data.note));
    }

    lines.push(String::new());
    lines.push("Thank you!".to_string());

    lines.join("\n")
}

/// Build the deep-link URL that opens the messaging app pre-filled with `message`.
///
/// The message is percent-encoded as a URL query component, so spaces,
/// newlines, and punctuation are all escaped. The recipient is passed through
/// as configured; no format validation is applied here.
pub fn build_deep_link(message: &str, recipient: &str, base_endpoint: &str) -> String {
    let encoded = urlencoding::encode(message);
    let url = format!("{}{}?text={}", base_endpoint, recipient, encoded);

    tracing::debug!(
        recipient = %recipient,
        url_len = url.len(),
        "Built deep link"
    );

    url
}

/// [`build_deep_link`] using the recipient and endpoint from a loaded [`Config`].
pub fn build_deep_link_from_config(message: &str, config: &Config) -> String {
    build_deep_link(message, &config.recipient_id, &config.base_endpoint)
}
