//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are personal data; mask them before they reach the logs.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters of the local part (or fewer if it is
/// shorter) followed by asterisks and the domain.
///
/// # Examples
/// ```
/// use user_crud_api::utils::log_sanitizer::mask_email;
///
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local_part, domain)) => format!("{}***@{}", visible_prefix(local_part), domain),
        // Not an email, mask most of it
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(VISIBLE_CHARS).collect()
}
