//! Declarative field validation for entity drafts
//!
//! Every form declares its rules once (`ValidationRules` is const-constructible)
//! and collects failures into a `FieldErrors` map. An empty map means the draft
//! may be submitted; any entry blocks submission entirely.

use std::collections::BTreeMap;

/// Validation rules for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints (field is optional free text)
    pub const fn none() -> Self {
        Self {
            required: false,
            email: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Field must be non-blank
    pub const fn required() -> Self {
        Self {
            required: true,
            email: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Field must be non-blank and shaped like an e-mail address
    pub const fn email() -> Self {
        Self {
            required: true,
            email: true,
            min_length: None,
            max_length: None,
        }
    }

    /// Field must be non-blank with a character-count range
    pub const fn length(min: usize, max: usize) -> Self {
        Self {
            required: true,
            email: false,
            min_length: Some(min),
            max_length: Some(max),
        }
    }

    /// Validate a string value, recording the first failed rule under `field`.
    ///
    /// Rules are checked in order: presence, length, format. A blank optional
    /// field passes regardless of the other rules.
    pub fn check(&self, errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            if self.required {
                errors.insert(field, format!("{} must not be empty", label));
            }
            return;
        }

        let chars = value.chars().count();
        if let Some(min) = self.min_length {
            if chars < min {
                errors.insert(field, format!("{} must be at least {} characters", label, min));
                return;
            }
        }
        if let Some(max) = self.max_length {
            if chars > max {
                errors.insert(field, format!("{} must be at most {} characters", label, max));
                return;
            }
        }

        if self.email && !is_email_shape(value) {
            errors.insert(field, format!("{} is not a valid e-mail address", label));
        }
    }
}

/// Structural e-mail check: exactly one '@' separating a non-empty local part
/// from a non-empty domain with no blank dot-labels or whitespace. A dot-less
/// domain is accepted (login names like "tungnt@aptech" are e-mail-shaped).
/// Deliverability is the server's problem.
fn is_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').all(|l| !l.is_empty())
}

/// Field-name to human-readable-message map produced by a validation pass.
///
/// Ordered so inline rendering and "first message" reporting are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, field: &'static str, message: String) {
        self.errors.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        let mut errors = FieldErrors::new();
        ValidationRules::required().check(&mut errors, "name", "Name", "");
        ValidationRules::required().check(&mut errors, "address", "Address", "   ");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name must not be empty"));
    }

    #[test]
    fn optional_blank_field_passes() {
        let mut errors = FieldErrors::new();
        ValidationRules::none().check(&mut errors, "description", "Description", "");
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_email_shape("tungnt@aptech"));
        assert!(is_email_shape("tungnt@aptech.io"));
        assert!(is_email_shape("a.b@shop.example.com"));
        assert!(!is_email_shape("plainaddress"));
        assert!(!is_email_shape("@missing-local.io"));
        assert!(!is_email_shape("user@"));
        assert!(!is_email_shape("user@double..dot"));
        assert!(!is_email_shape("two@ats@here.io"));
        assert!(!is_email_shape("spaced user@shop.io"));
    }

    #[test]
    fn email_rule_records_format_error() {
        let mut errors = FieldErrors::new();
        ValidationRules::email().check(&mut errors, "email", "E-mail", "not-an-email");
        assert_eq!(errors.get("email"), Some("E-mail is not a valid e-mail address"));
    }

    #[test]
    fn length_bounds() {
        let mut errors = FieldErrors::new();
        ValidationRules::length(3, 20).check(&mut errors, "password", "Password", "ab");
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 3 characters")
        );

        let mut errors = FieldErrors::new();
        let long = "x".repeat(21);
        ValidationRules::length(3, 20).check(&mut errors, "password", "Password", &long);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at most 20 characters")
        );

        let mut errors = FieldErrors::new();
        ValidationRules::length(3, 20).check(&mut errors, "password", "Password", "abc");
        assert!(errors.is_empty());
    }

    #[test]
    fn first_failed_rule_wins() {
        let mut errors = FieldErrors::new();
        ValidationRules::email().check(&mut errors, "email", "E-mail", "bad");
        ValidationRules::email().check(&mut errors, "email", "E-mail", "");
        // second insert must not overwrite the first recorded message
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("E-mail is not a valid e-mail address"));
    }

    #[test]
    fn iteration_is_ordered_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert("phoneNumber", "Phone number must not be empty".into());
        errors.insert("email", "E-mail must not be empty".into());
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["email", "phoneNumber"]);
        assert_eq!(errors.first_message(), Some("E-mail must not be empty"));
    }
}
