//! Contact form validation
//!
//! The [`Validator`] holds the per-field rule lists. It is built once at
//! startup and handed to whatever runs a validation pass. Every field is
//! checked on every pass; a field that fails reports one message, picked by
//! [`ErrorPrecedence`].

mod error_map;
mod rules;

pub use error_map::{ErrorMap, FieldValidationError};
use rules::{CheckedRule, Rule};

use crate::state::{FieldName, FormState};
use regex::Regex;
use serde::{Deserialize, Serialize};

const LETTERS_ONLY: &str = r"^[A-Za-z]+$";
const AT_THEN_DOT: &str = r"@.*\.";
/// WHATWG-style address syntax: ASCII local part, dot-separated hostname labels
const EMAIL_SYNTAX: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

pub const MESSAGE_MIN_LEN: usize = 100;
pub const MESSAGE_MAX_LEN: usize = 1000;
pub const FIRST_NAME_MIN_LEN: usize = 4;

/// Which message a field reports when several of its rules fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPrecedence {
    /// The first failing rule in declaration order
    #[default]
    First,
    /// The last failing rule in declaration order
    Last,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid pattern for {field}: {source}")]
    Pattern {
        field: FieldName,
        #[source]
        source: regex::Error,
    },
}

/// Rules for a single field
#[derive(Debug, Clone)]
struct FieldRules {
    field: FieldName,
    rules: Vec<CheckedRule>,
}

/// The contact form rule set
#[derive(Debug, Clone)]
pub struct Validator {
    fields: Vec<FieldRules>,
    precedence: ErrorPrecedence,
}

fn compile(field: FieldName, re: &str) -> Result<Regex, SchemaError> {
    Regex::new(re).map_err(|source| SchemaError::Pattern { field, source })
}

fn pattern(field: FieldName, re: &str) -> Result<Rule, SchemaError> {
    compile(field, re).map(Rule::Pattern)
}

impl Validator {
    /// Compile the rule table, reporting first-failing-rule messages
    pub fn new() -> Result<Self, SchemaError> {
        use FieldName::*;

        let fields = vec![
            FieldRules {
                field: FirstName,
                rules: vec![
                    CheckedRule::new(
                        pattern(FirstName, LETTERS_ONLY)?,
                        "First name must contain only letters",
                    ),
                    CheckedRule::new(
                        Rule::MinLength(FIRST_NAME_MIN_LEN),
                        "First name must be at least 4 characters long",
                    ),
                    CheckedRule::new(Rule::Required, "First name is required"),
                ],
            },
            FieldRules {
                field: LastName,
                rules: vec![
                    // Same text as the first name rule; kept as shipped
                    CheckedRule::new(
                        pattern(LastName, LETTERS_ONLY)?,
                        "First name must contain only letters",
                    ),
                    CheckedRule::new(Rule::Required, "Last name is required"),
                ],
            },
            FieldRules {
                field: Email,
                rules: vec![
                    CheckedRule::new(
                        pattern(Email, AT_THEN_DOT)?,
                        "Email must contain \"@\" and \".\"",
                    ),
                    CheckedRule::new(
                        Rule::OptionalPattern(compile(Email, EMAIL_SYNTAX)?),
                        "Invalid email address",
                    ),
                    CheckedRule::new(Rule::Required, "Email is required"),
                ],
            },
            FieldRules {
                field: QueryType,
                rules: vec![
                    CheckedRule::new(Rule::OneOfOptions, "Query type is required"),
                    CheckedRule::new(Rule::Required, "Query type is required"),
                ],
            },
            FieldRules {
                field: Message,
                rules: vec![
                    CheckedRule::new(
                        Rule::MinLength(MESSAGE_MIN_LEN),
                        "Message must be at least 100 characters long",
                    ),
                    CheckedRule::new(
                        Rule::MaxLength(MESSAGE_MAX_LEN),
                        "Message cannot exceed 1000 characters",
                    ),
                    CheckedRule::new(Rule::Required, "Message is required"),
                ],
            },
            FieldRules {
                field: Consent,
                rules: vec![CheckedRule::new(
                    Rule::MustBeTrue,
                    "You must consent to proceed",
                )],
            },
        ];

        Ok(Self {
            fields,
            precedence: ErrorPrecedence::default(),
        })
    }

    pub fn with_precedence(mut self, precedence: ErrorPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Validate the whole form, `Err` carries one message per failing field
    pub fn validate(&self, state: &FormState) -> Result<(), ErrorMap> {
        let errors = self.errors(state);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Error map for the form; empty when every field passes
    pub fn errors(&self, state: &FormState) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|field_rules| {
                let value = state.value(field_rules.field);
                let mut failing = field_rules
                    .rules
                    .iter()
                    .filter(|r| !r.rule.check(&value));
                let chosen = match self.precedence {
                    ErrorPrecedence::First => failing.next(),
                    ErrorPrecedence::Last => failing.last(),
                }?;
                Some(FieldValidationError {
                    field: field_rules.field,
                    message: chosen.message.to_string(),
                })
            })
            .collect()
    }
}
