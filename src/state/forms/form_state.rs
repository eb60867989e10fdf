//! Form state management and the contact form holder

use super::field::{FieldKind, FieldName, FieldValue, QueryType};
use crate::validation::{ErrorMap, Validator};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Live values of all contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: Option<QueryType>,
    pub message: String,
    pub consent: bool,
}

impl FormState {
    /// Current value of a field
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldName::LastName => FieldValue::Text(self.last_name.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::QueryType => FieldValue::Choice(self.query_type),
            FieldName::Message => FieldValue::Text(self.message.clone()),
            FieldName::Consent => FieldValue::Toggle(self.consent),
        }
    }

    /// Borrow a text field, `None` for radio and checkbox fields
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::Email => Some(&self.email),
            FieldName::Message => Some(&self.message),
            FieldName::QueryType | FieldName::Consent => None,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Message => Some(&mut self.message),
            FieldName::QueryType | FieldName::Consent => None,
        }
    }
}

/// Errors from editing the form programmatically
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field {field} does not accept a {kind:?} value")]
    ValueKind { field: FieldName, kind: FieldKind },
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    Invalid(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid)
    }
}

/// Number of focus stops: six fields plus the Submit button
const FOCUS_STOPS: usize = FieldName::ALL.len() + 1;

/// Owns the form values, the latest error map and the focus cursor
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub state: FormState,
    pub errors: ErrorMap,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field under the cursor, `None` when the Submit button is focused
    pub fn active(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the Submit button is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == FieldName::ALL.len()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active()
            .is_some_and(|f| f.kind() == FieldKind::MultilineText)
    }

    /// Replace the named field's value
    pub fn on_field_change(
        &mut self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(), FormError> {
        if !value.accepts(field.kind()) {
            return Err(FormError::ValueKind {
                field,
                kind: field.kind(),
            });
        }
        match (field, value) {
            (FieldName::QueryType, FieldValue::Choice(q)) => self.state.query_type = q,
            (FieldName::Consent, FieldValue::Toggle(b)) => self.state.consent = b,
            (field, FieldValue::Text(s)) => {
                if let Some(slot) = self.state.text_mut(field) {
                    *slot = s;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the whole form and replace the error map with the result
    pub fn on_submit(&mut self, validator: &Validator) -> SubmitOutcome {
        match validator.validate(&self.state) {
            Ok(()) => {
                self.errors = ErrorMap::default();
                SubmitOutcome::Valid
            }
            Err(errors) => {
                self.errors = errors.clone();
                SubmitOutcome::Invalid(errors)
            }
        }
    }

    /// Restore the initial values and drop all errors
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.errors = ErrorMap::default();
    }

    /// Append a character to the active text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active() {
            if let Some(text) = self.state.text_mut(field) {
                text.push(c);
            }
        }
    }

    /// Remove the last character from the active text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active() {
            if let Some(text) = self.state.text_mut(field) {
                text.pop();
            }
        }
    }

    /// Insert a line break; only the message field is multiline
    pub fn newline(&mut self) {
        if self.is_active_field_multiline() {
            self.state.message.push('\n');
        }
    }

    pub fn toggle_consent(&mut self) {
        self.state.consent = !self.state.consent;
    }

    /// Move the query type selection forward, selecting the first option when unset
    pub fn cycle_query_type(&mut self) {
        self.state.query_type = Some(match self.state.query_type {
            None => QueryType::GeneralEnquiry,
            Some(q) => q.other(),
        });
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FOCUS_STOPS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FOCUS_STOPS - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn validator() -> Validator {
        Validator::new().unwrap()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.state = FormState {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john@smith.com".to_string(),
            query_type: Some(QueryType::SupportRequest),
            message: "m".repeat(150),
            consent: true,
        };
        form
    }

    mod field_change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_change_replaces_value() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldName::Email, FieldValue::Text("a@b.com".into()))
                .unwrap();
            form.on_field_change(FieldName::Email, FieldValue::Text("c@d.org".into()))
                .unwrap();
            assert_eq!(form.state.email, "c@d.org");
        }

        #[test]
        fn test_checkbox_takes_toggle_state() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldName::Consent, FieldValue::Toggle(true))
                .unwrap();
            assert!(form.state.consent);
            form.on_field_change(FieldName::Consent, FieldValue::Toggle(false))
                .unwrap();
            assert!(!form.state.consent);
        }

        #[test]
        fn test_radio_takes_selection() {
            let mut form = ContactForm::new();
            form.on_field_change(
                FieldName::QueryType,
                FieldValue::Choice(Some(QueryType::GeneralEnquiry)),
            )
            .unwrap();
            assert_eq!(form.state.query_type, Some(QueryType::GeneralEnquiry));
            form.on_field_change(FieldName::QueryType, FieldValue::Choice(None))
                .unwrap();
            assert_eq!(form.state.query_type, None);
        }

        #[test]
        fn test_wrong_value_kind_is_rejected() {
            let mut form = ContactForm::new();
            let err = form
                .on_field_change(FieldName::Consent, FieldValue::Text("yes".into()))
                .unwrap_err();
            assert_eq!(
                err,
                FormError::ValueKind {
                    field: FieldName::Consent,
                    kind: FieldKind::Checkbox
                }
            );
            assert!(!form.state.consent);
        }

        #[test]
        fn test_change_does_not_touch_errors() {
            let mut form = ContactForm::new();
            form.on_submit(&validator());
            let before = form.errors.clone();
            form.on_field_change(FieldName::FirstName, FieldValue::Text("John".into()))
                .unwrap();
            assert_eq!(form.errors, before);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_clears_errors() {
            let mut form = filled_form();
            form.errors = validator().errors(&FormState::default());
            assert!(!form.errors.is_empty());

            let outcome = form.on_submit(&validator());
            assert!(outcome.is_valid());
            assert!(form.errors.is_empty());
        }

        #[test]
        fn test_invalid_form_replaces_errors_wholesale() {
            let mut form = ContactForm::new();
            form.on_submit(&validator());
            assert!(form.errors.get(FieldName::FirstName).is_some());

            form.state = filled_form().state;
            form.state.consent = false;
            let outcome = form.on_submit(&validator());

            let SubmitOutcome::Invalid(errors) = outcome else {
                panic!("expected invalid outcome");
            };
            assert_eq!(errors.fields(), vec![FieldName::Consent]);
            assert_eq!(form.errors, errors);
        }

        #[test]
        fn test_submit_does_not_reset_state() {
            let mut form = filled_form();
            let before = form.state.clone();
            form.on_submit(&validator());
            assert_eq!(form.state, before);
        }

        #[test]
        fn test_reset_clears_state_and_errors() {
            let mut form = filled_form();
            form.state.email = "broken".into();
            form.on_submit(&validator());
            form.reset();
            assert_eq!(form.state, FormState::default());
            assert!(form.errors.is_empty());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit() {
            let form = ContactForm::new();
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_submit_active());
            assert_eq!(form.active(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_and_backspace_on_active_text_field() {
            let mut form = ContactForm::new();
            form.set_active_field(FieldName::LastName.index());
            for c in "Smithy".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.state.last_name, "Smith");
            assert_eq!(form.state.first_name, "");
        }

        #[test]
        fn test_input_ignored_on_checkbox() {
            let mut form = ContactForm::new();
            form.set_active_field(FieldName::Consent.index());
            form.input_char('x');
            form.backspace();
            assert_eq!(form.state, FormState::default());
        }

        #[test]
        fn test_newline_only_in_message() {
            let mut form = ContactForm::new();
            form.newline();
            assert_eq!(form.state.first_name, "");
            form.set_active_field(FieldName::Message.index());
            form.input_char('a');
            form.newline();
            form.input_char('b');
            assert_eq!(form.state.message, "a\nb");
        }

        #[test]
        fn test_cycle_query_type_from_unset() {
            let mut form = ContactForm::new();
            form.cycle_query_type();
            assert_eq!(form.state.query_type, Some(QueryType::GeneralEnquiry));
            form.cycle_query_type();
            assert_eq!(form.state.query_type, Some(QueryType::SupportRequest));
            form.cycle_query_type();
            assert_eq!(form.state.query_type, Some(QueryType::GeneralEnquiry));
        }

        #[test]
        fn test_value_reads_back() {
            let form = filled_form();
            assert_eq!(
                form.state.value(FieldName::QueryType),
                FieldValue::Choice(Some(QueryType::SupportRequest))
            );
            assert_eq!(form.state.value(FieldName::Consent), FieldValue::Toggle(true));
            assert_eq!(form.state.text(FieldName::Consent), None);
        }
    }

    #[test]
    fn test_form_state_serializes_camel_case() {
        let state = filled_form().state;
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["queryType"], "Support Request");
        assert_eq!(json["consent"], true);
    }
}
