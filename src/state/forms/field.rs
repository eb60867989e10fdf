//! Form field names, kinds and value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six contact form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::QueryType,
        FieldName::Message,
        FieldName::Consent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::QueryType => "queryType",
            FieldName::Message => "message",
            FieldName::Consent => "consent",
        }
    }

    /// Label shown in the field's border
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name *",
            FieldName::LastName => "Last Name *",
            FieldName::Email => "Email Address *",
            FieldName::QueryType => "Query Type *",
            FieldName::Message => "Message *",
            FieldName::Consent => "Consent *",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::FirstName | FieldName::LastName | FieldName::Email => FieldKind::Text,
            FieldName::QueryType => FieldKind::Radio,
            FieldName::Message => FieldKind::MultilineText,
            FieldName::Consent => FieldKind::Checkbox,
        }
    }

    /// Position of the field in the focus order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<FieldName> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultilineText,
    Radio,
    Checkbox,
}

impl FieldKind {
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::MultilineText)
    }
}

/// Query type radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryType {
    #[serde(rename = "General Enquiry")]
    GeneralEnquiry,
    #[serde(rename = "Support Request")]
    SupportRequest,
}

impl QueryType {
    pub const ALL: [QueryType; 2] = [QueryType::GeneralEnquiry, QueryType::SupportRequest];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::GeneralEnquiry => "General Enquiry",
            QueryType::SupportRequest => "Support Request",
        }
    }

    pub fn other(&self) -> QueryType {
        match self {
            QueryType::GeneralEnquiry => QueryType::SupportRequest,
            QueryType::SupportRequest => QueryType::GeneralEnquiry,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<QueryType>),
    Toggle(bool),
}

impl FieldValue {
    pub fn accepts(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text | FieldKind::MultilineText)
                | (FieldValue::Choice(_), FieldKind::Radio)
                | (FieldValue::Toggle(_), FieldKind::Checkbox)
        )
    }
}
