//! Individual field rules

use crate::state::FieldValue;
use regex::Regex;

/// One constraint on a field value
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regex search over the text; empty text is checked like any other
    Pattern(Regex),
    /// Regex search that lets empty text through (required covers it)
    OptionalPattern(Regex),
    MinLength(usize),
    MaxLength(usize),
    /// A radio option must be selected
    OneOfOptions,
    Required,
    MustBeTrue,
}

impl Rule {
    /// Returns true if the value satisfies the rule
    pub fn check(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Rule::Pattern(re), FieldValue::Text(s)) => re.is_match(s),
            (Rule::OptionalPattern(re), FieldValue::Text(s)) => s.is_empty() || re.is_match(s),
            (Rule::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (Rule::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= *max,
            (Rule::OneOfOptions, FieldValue::Choice(q)) => q.is_some(),
            (Rule::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::Required, FieldValue::Choice(q)) => q.is_some(),
            (Rule::Required, FieldValue::Toggle(_)) => true,
            (Rule::MustBeTrue, FieldValue::Toggle(b)) => *b,
            // A rule declared against the wrong kind of field never passes
            _ => false,
        }
    }
}

/// A rule paired with the message reported when it fails
#[derive(Debug, Clone)]
pub struct CheckedRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl CheckedRule {
    pub fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}
