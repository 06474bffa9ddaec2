// src/core/record.rs
//
// The four-field record shape. Candidates come in loose (any field may be
// missing, values may carry markup); validation at this boundary is the only
// place a Record is ever constructed.

use super::markup::{normalize, normalize_link};

pub const FIELD_NAMES: [&str; 4] = ["Company", "Role", "Location", "Link"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Company,
    Role,
    Location,
    Link,
}

impl Field {
    /// Map a column-header alias to its field, case-insensitive.
    pub fn from_alias(name: &str) -> Option<Field> {
        match name.trim().to_ascii_lowercase().as_str() {
            "company" | "employer" => Some(Field::Company),
            "role" | "title" | "position" | "job title" => Some(Field::Role),
            "location" | "city" | "where" => Some(Field::Location),
            "link" | "url" | "href" => Some(Field::Link),
            _ => None,
        }
    }
}

/// Unvalidated candidate from a document or a scrape. Values may still
/// contain markup; absent means the source had nothing for that field.
#[derive(Clone, Debug, Default)]
pub struct RawCandidate {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

impl RawCandidate {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Company => self.company = Some(value),
            Field::Role => self.role = Some(value),
            Field::Location => self.location = Some(value),
            Field::Link => self.link = Some(value),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => self.company.as_deref(),
            Field::Role => self.role.as_deref(),
            Field::Location => self.location.as_deref(),
            Field::Link => self.link.as_deref(),
        }
    }

    /// Normalize every field and build a `Record`. Absent becomes empty.
    /// A row that is empty in all four fields after normalization carries
    /// no information and is dropped (None) rather than erroring.
    pub fn validate(self) -> Option<Record> {
        let company = normalize(self.company.as_deref().unwrap_or(""));
        let role = normalize(self.role.as_deref().unwrap_or(""));
        let location = normalize(self.location.as_deref().unwrap_or(""));
        let link = normalize_link(self.link.as_deref().unwrap_or(""));

        if company.is_empty() && role.is_empty() && location.is_empty() && link.is_empty() {
            return None;
        }
        Some(Record { company, role, location, link })
    }
}

/// Validated, markup-stripped, trimmed record. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub company: String,
    pub role: String,
    pub location: String,
    pub link: String,
}

impl Record {
    pub fn fields(&self) -> [&str; 4] {
        [&self.company, &self.role, &self.location, &self.link]
    }

    /// Duplicate-detection key: Company + Role + Link, case-insensitive and
    /// whitespace-collapsed. Location takes no part in identity; sources
    /// format it too inconsistently.
    pub fn identity_key(&self) -> String {
        fn fold(s: &str) -> String {
            s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
        }
        join!(fold(&self.company), "\u{1f}", &fold(&self.role), "\u{1f}", &fold(&self.link))
    }
}
