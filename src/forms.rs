//! Form Models
//!
//! Plain form data for the controlled form demo and the validated signup
//! page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Controlled form state, one field per input `name`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

impl ContactForm {
    /// Set the field matching an input `name`; unknown names are ignored
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            _ => log::debug!("ignoring unknown form field `{}`", field),
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Signup form checked before submit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 2, message = "Min 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
}

impl SignupForm {
    /// First message per failing field, empty when the form is valid
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let Err(errors) = self.validate() else {
            return BTreeMap::new();
        };
        errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let msg = errs.first()?.message.as_ref()?.to_string();
                Some((field.to_string(), msg))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_by_name() {
        let mut form = ContactForm::default();
        form.set_field("name", "Ada".into());
        form.set_field("email", "ada@example.com".into());
        form.set_field("phone", "123".into());
        assert_eq!(form, ContactForm { name: "Ada".into(), email: "ada@example.com".into() });
        assert!(form.to_pretty_json().contains("\"name\": \"Ada\""));
    }

    #[test]
    fn test_valid_signup_has_no_errors() {
        let form = SignupForm { name: "Al".into(), email: "al@example.com".into() };
        assert!(form.validate().is_ok());
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_short_name_and_bad_email() {
        let form = SignupForm { name: "A".into(), email: "not-an-email".into() };
        let errors = form.field_errors();
        assert_eq!(errors.get("name").map(String::as_str), Some("Min 2 characters"));
        assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email"));
    }

    #[test]
    fn test_empty_form_reports_both_fields() {
        let errors = SignupForm::default().field_errors();
        assert_eq!(errors.len(), 2);
    }
}
