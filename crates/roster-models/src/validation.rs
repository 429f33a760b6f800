//! Field rules for student forms.
//!
//! Each rule returns the first failing check as a [`ValidationError`] whose
//! message is shown next to the field. The email rule reports the most
//! specific problem it can find (spaces, `@` count, capitals, domain) before
//! falling back to the general format check, but the set of accepted
//! addresses is exactly `^[a-z][a-z0-9._%+-]*@gmail\.com$`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9._%+-]*@gmail\.com$").expect("email pattern compiles")
});

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern compiles"));

pub const GMAIL_SUFFIX: &str = "@gmail.com";

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(rule("required", "Name is required."));
    }
    if !NAME_RE.is_match(name) {
        return Err(rule(
            "name_format",
            "Name must contain only letters and spaces.",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(rule("required", "Email is required."));
    }
    if email.contains(char::is_whitespace) {
        return Err(rule("email_spaces", "Spaces are not allowed in email."));
    }
    if email.matches('@').count() != 1 {
        return Err(rule(
            "email_at_sign",
            "Email must contain exactly one '@' symbol.",
        ));
    }
    if email.chars().any(|c| c.is_uppercase()) {
        return Err(rule("email_uppercase", "Capital letters are not allowed."));
    }
    if !email.ends_with(GMAIL_SUFFIX) {
        return Err(rule("email_domain", "Email must end with @gmail.com."));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(rule("email_format", "Invalid email format."));
    }
    Ok(())
}

pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.trim().is_empty() {
        return Err(rule("required", "Mobile number is required."));
    }
    if !MOBILE_RE.is_match(mobile) {
        return Err(rule(
            "mobile_format",
            "Mobile number must be exactly 10 digits.",
        ));
    }
    Ok(())
}
