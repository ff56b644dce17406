//! Custom field validators used by the request DTOs

use std::borrow::Cow;

use validator::ValidationError;

/// Indian mobile number: optional `+91`, `91` or `0` prefix, then ten digits starting 6-9
pub fn is_indian_mobile(value: &str) -> bool {
    let candidates = [
        Some(value),
        value.strip_prefix("+91"),
        value.strip_prefix("91"),
        value.strip_prefix('0'),
    ];

    candidates.into_iter().flatten().any(|number| {
        number.len() == 10
            && number.bytes().all(|b| b.is_ascii_digit())
            && matches!(number.as_bytes()[0], b'6'..=b'9')
    })
}

pub fn validate_indian_phone(value: &str) -> Result<(), ValidationError> {
    if is_indian_mobile(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("Please provide a valid Indian phone number")))
    }
}

/// Names are 2 to 100 characters once surrounding whitespace is removed
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    match value.trim().chars().count() {
        0..=1 => Err(ValidationError::new("name")
            .with_message(Cow::Borrowed("Name must be at least 2 characters"))),
        2..=100 => Ok(()),
        _ => Err(ValidationError::new("name")
            .with_message(Cow::Borrowed("Name must be at most 100 characters"))),
    }
}

/// Search terms are measured after trimming, the same way the search runs
pub fn validate_search_term(value: &str) -> Result<(), ValidationError> {
    match value.trim().chars().count() {
        0..=1 => Err(ValidationError::new("q")
            .with_message(Cow::Borrowed("Search query must be at least 2 characters"))),
        2..=100 => Ok(()),
        _ => Err(ValidationError::new("q")
            .with_message(Cow::Borrowed("Search query must be at most 100 characters"))),
    }
}
