// 📝 Form State - one slot per field, reducer-style updates
// Each keystroke goes through fields::process() and the result replaces the
// slot's value and error. Submission is gated on the whole form.

use crate::fields::{self, ErrorCode, FieldKind, ValidationResult};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

pub const CORRECT_ERRORS_NOTICE: &str = "Please correct the errors before proceeding.";

// ============================================================================
// FIELD SLOT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub error: Option<ErrorCode>,
    /// Completes "Please enter ..." for required fields; `None` means optional
    pub prompt: Option<&'static str>,
    /// When false, `InvalidFormat` is not raised (normalization still applies)
    pub format_checked: bool,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FormField {
            name,
            label,
            kind,
            value: String::new(),
            error: None,
            prompt: None,
            format_checked: true,
        }
    }

    pub fn required(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Accept any value the normalizer produces, e.g. a login email
    pub fn unchecked(mut self) -> Self {
        self.format_checked = false;
        self
    }

    pub fn is_required(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn message(&self) -> Option<String> {
        self.error.map(|code| code.message(self.kind))
    }

    pub fn is_secret(&self) -> bool {
        self.kind == FieldKind::Password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please correct the errors before proceeding.")]
    HasErrors { fields: Vec<&'static str> },
    #[error("Please enter {prompt}")]
    Missing {
        field: &'static str,
        prompt: &'static str,
    },
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

pub type FormValues = HashMap<&'static str, String>;

// ============================================================================
// FORM STATE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
    focus: usize,
    /// Pair of fields that must hold the same value on submit
    confirm: Option<(&'static str, &'static str)>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        FormState {
            fields,
            focus: 0,
            confirm: None,
        }
    }

    pub fn must_match(mut self, field: &'static str, confirmation: &'static str) -> Self {
        self.confirm = Some((field, confirmation));
        self
    }

    pub fn login() -> Self {
        FormState::new(vec![
            // No credential check at login: any non-empty email goes through
            FormField::new("email", "Email", FieldKind::Email)
                .required("your email")
                .unchecked(),
            FormField::new("password", "Password", FieldKind::Password),
        ])
    }

    pub fn signup() -> Self {
        FormState::new(vec![
            FormField::new("full_name", "Full Name", FieldKind::FullName).required("your full name"),
            FormField::new("email", "Email", FieldKind::Email).required("your email"),
            FormField::new("password", "Password", FieldKind::Password).required("a password"),
            FormField::new("confirm_password", "Confirm Password", FieldKind::Password)
                .required("your password again"),
        ])
        .must_match("password", "confirm_password")
    }

    /// Card fields are optional; only inline errors block the proceed button
    pub fn card_payment() -> Self {
        FormState::new(vec![
            FormField::new("card_number", "Card Number", FieldKind::CardNumber),
            FormField::new("card_holder", "Card Holder Name", FieldKind::CardHolder),
            FormField::new("expiry_date", "Expiry Date", FieldKind::ExpiryDate),
            FormField::new("cvv", "CVV", FieldKind::Cvv),
        ])
    }

    pub fn upi() -> Self {
        FormState::new(vec![
            FormField::new("upi_id", "Enter UPI ID", FieldKind::UpiId).required("your UPI ID"),
        ])
    }

    pub fn send_money() -> Self {
        FormState::new(vec![
            FormField::new("amount", "Amount", FieldKind::Amount).required("an amount"),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<ErrorCode> {
        self.field(name).and_then(|f| f.error)
    }

    // ------------------------------------------------------------------------
    // Keystrokes
    // ------------------------------------------------------------------------

    /// Apply one raw text-change event to `name`
    pub fn input(&mut self, name: &str, raw: &str) -> Option<ValidationResult> {
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            warn!(field = name, "input for unknown field ignored");
            return None;
        };

        let mut result = fields::process(field.kind, &field.value, raw);
        if !field.format_checked && result.error == Some(ErrorCode::InvalidFormat) {
            result.error = None;
        }
        field.value = result.normalized_value.clone();
        field.error = result.error;
        Some(result)
    }

    pub fn push_char(&mut self, name: &str, ch: char) -> Option<ValidationResult> {
        let mut next = self.value(name).to_string();
        next.push(ch);
        self.input(name, &next)
    }

    pub fn erase(&mut self, name: &str) -> Option<ValidationResult> {
        let kind = self.field(name)?.kind;
        let next = fields::erase(kind, self.value(name));
        self.input(name, &next)
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    // ------------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------------

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn set_focus(&mut self, name: &str) -> bool {
        match self.fields.iter().position(|f| f.name == name) {
            Some(i) => {
                self.focus = i;
                true
            }
            None => false,
        }
    }

    pub fn type_char(&mut self, ch: char) -> Option<ValidationResult> {
        let name = self.focused()?.name;
        self.push_char(name, ch)
    }

    pub fn erase_focused(&mut self) -> Option<ValidationResult> {
        let name = self.focused()?.name;
        self.erase(name)
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    pub fn error_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.error.is_some())
            .map(|f| f.name)
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Gate for the submit/proceed action. Inline errors win over missing
    /// required values, which win over a confirmation mismatch.
    pub fn submit(&self) -> Result<FormValues, SubmitError> {
        let invalid = self.error_fields();
        if !invalid.is_empty() {
            warn!(fields = ?invalid, "submission blocked by field errors");
            return Err(SubmitError::HasErrors { fields: invalid });
        }

        let missing = self.fields.iter().find_map(|f| match f.prompt {
            Some(prompt) if f.value.trim().is_empty() => Some(SubmitError::Missing {
                field: f.name,
                prompt,
            }),
            _ => None,
        });
        if let Some(err) = missing {
            warn!(error = %err, "submission blocked by empty field");
            return Err(err);
        }

        if let Some((field, confirmation)) = self.confirm {
            if self.value(field) != self.value(confirmation) {
                warn!(field, confirmation, "submission blocked by mismatch");
                return Err(SubmitError::PasswordMismatch);
            }
        }

        debug!(fields = self.fields.len(), "form submitted");
        Ok(self
            .fields
            .iter()
            .map(|f| (f.name, f.value.clone()))
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut FormState, name: &str, text: &str) {
        for ch in text.chars() {
            form.push_char(name, ch);
        }
    }

    fn filled_card_form() -> FormState {
        let mut form = FormState::card_payment();
        form.input("card_number", "4111111111111111");
        form.input("card_holder", "JOHN DOE");
        form.input("expiry_date", "1225");
        form.input("cvv", "123");
        form
    }

    #[test]
    fn test_card_form_end_to_end() {
        let form = filled_card_form();

        assert_eq!(form.value("expiry_date"), "12/25");
        assert!(form.error_fields().is_empty());

        let values = form.submit().unwrap();
        assert_eq!(values["card_number"], "4111111111111111");
        assert_eq!(values["card_holder"], "JOHN DOE");
        assert_eq!(values["expiry_date"], "12/25");
        assert_eq!(values["cvv"], "123");
    }

    #[test]
    fn test_bad_cvv_blocks_submission() {
        let mut form = filled_card_form();
        form.input("cvv", "12a");

        assert_eq!(form.error("cvv"), Some(ErrorCode::NonNumeric));
        assert_eq!(form.error("card_number"), None);
        assert_eq!(form.error("card_holder"), None);
        assert_eq!(form.error("expiry_date"), None);

        let err = form.submit().unwrap_err();
        assert_eq!(err, SubmitError::HasErrors { fields: vec!["cvv"] });
        assert_eq!(err.to_string(), CORRECT_ERRORS_NOTICE);
    }

    #[test]
    fn test_card_form_typed_keystroke_by_keystroke() {
        let mut form = FormState::card_payment();
        type_into(&mut form, "card_number", "4111 1111 1111 1111");
        type_into(&mut form, "card_holder", "JOHN DOE");
        type_into(&mut form, "expiry_date", "1225");
        type_into(&mut form, "cvv", "123");

        assert_eq!(form.value("card_number"), "4111111111111111");
        assert_eq!(form.value("expiry_date"), "12/25");
        assert_eq!(form.value("cvv"), "123");
        // The last keystroke on the number was a digit, so its error cleared
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_error_clears_on_next_valid_keystroke() {
        let mut form = FormState::card_payment();
        type_into(&mut form, "card_holder", "JO");
        form.push_char("card_holder", '7');
        assert_eq!(form.value("card_holder"), "JO");
        assert_eq!(form.error("card_holder"), Some(ErrorCode::NonAlpha));

        form.push_char("card_holder", 'E');
        assert_eq!(form.value("card_holder"), "JOE");
        assert_eq!(form.error("card_holder"), None);
    }

    #[test]
    fn test_extra_cvv_digit_reports_too_long() {
        let mut form = FormState::card_payment();
        type_into(&mut form, "cvv", "1234");
        assert_eq!(form.value("cvv"), "123");
        assert_eq!(form.error("cvv"), Some(ErrorCode::TooLong));
        assert_eq!(
            form.field("cvv").and_then(|f| f.message()).as_deref(),
            Some("CVV must be 3 digits.")
        );
    }

    #[test]
    fn test_expiry_backspace_over_slash() {
        let mut form = FormState::card_payment();
        type_into(&mut form, "expiry_date", "12");
        assert_eq!(form.value("expiry_date"), "12/");

        form.erase("expiry_date");
        assert_eq!(form.value("expiry_date"), "1");
        form.erase("expiry_date");
        assert_eq!(form.value("expiry_date"), "");
        form.erase("expiry_date");
        assert_eq!(form.value("expiry_date"), "");
    }

    #[test]
    fn test_empty_card_form_may_proceed() {
        assert!(FormState::card_payment().submit().is_ok());
    }

    #[test]
    fn test_send_money_requires_amount() {
        let form = FormState::send_money();
        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            SubmitError::Missing {
                field: "amount",
                prompt: "an amount"
            }
        );
        assert_eq!(err.to_string(), "Please enter an amount");
    }

    #[test]
    fn test_login_form() {
        let mut form = FormState::login();
        assert!(form.submit().is_err());

        type_into(&mut form, "email", "a@b.com");
        type_into(&mut form, "password", "secret");
        let values = form.submit().unwrap();
        assert_eq!(values["email"], "a@b.com");
        assert!(form.field("password").unwrap().is_secret());
    }

    #[test]
    fn test_login_accepts_any_non_empty_email() {
        let mut form = FormState::login();
        type_into(&mut form, "email", "john");
        assert_eq!(form.error("email"), None);
        assert_eq!(form.submit().unwrap()["email"], "john");

        form.input("email", "  ");
        assert_eq!(form.value("email"), "");
        assert!(matches!(form.submit(), Err(SubmitError::Missing { field: "email", .. })));
    }

    #[test]
    fn test_signup_still_checks_email_format() {
        let mut form = FormState::signup();
        form.input("email", "john");
        assert_eq!(form.error("email"), Some(ErrorCode::InvalidFormat));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let mut form = FormState::signup();
        form.input("full_name", "Asha Rao");
        form.input("email", "asha@example.com");
        form.input("password", "hunter22");
        form.input("confirm_password", "hunter23");
        assert_eq!(form.submit().unwrap_err(), SubmitError::PasswordMismatch);

        form.input("confirm_password", "hunter22");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_errors_take_priority_over_missing() {
        let mut form = FormState::signup();
        form.input("email", "nope");
        assert!(matches!(form.submit(), Err(SubmitError::HasErrors { .. })));
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = FormState::upi();
        assert!(form.input("iban", "DE00").is_none());
        assert!(form.erase("iban").is_none());
    }

    #[test]
    fn test_focus_cycles_and_types() {
        let mut form = FormState::card_payment();
        assert_eq!(form.focused().unwrap().name, "card_number");

        form.focus_previous();
        assert_eq!(form.focused().unwrap().name, "cvv");
        form.type_char('7');
        assert_eq!(form.value("cvv"), "7");

        form.focus_next();
        assert_eq!(form.focused().unwrap().name, "card_number");
        assert!(form.set_focus("expiry_date"));
        form.type_char('0');
        form.type_char('9');
        assert_eq!(form.value("expiry_date"), "09/");
        form.erase_focused();
        assert_eq!(form.value("expiry_date"), "0");

        form.clear();
        assert_eq!(form.value("cvv"), "");
        assert_eq!(form.focus_index(), 0);
    }

    #[test]
    fn test_empty_form_has_no_focus() {
        let mut form = FormState::default();
        assert!(form.is_empty());
        assert!(form.focused().is_none());
        form.focus_next();
        assert!(form.type_char('x').is_none());
    }
}
