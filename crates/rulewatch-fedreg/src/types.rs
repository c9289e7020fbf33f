//! Federal Register `documents.json` response types.
//!
//! Only the fields the collector keeps are modelled; everything else in the
//! payload is ignored. Conversion into the fixed [`Record`] schema happens
//! here, at the collector boundary.

use rulewatch_core::{join_agency_names, Record};
use serde::Deserialize;

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct DocumentsPage {
    #[serde(default)]
    pub count: Option<u64>,
    /// Absent on some responses (notably empty ones).
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<RawDocument>>,
}

impl DocumentsPage {
    /// Results on this page; a missing or null `results` key is an empty page.
    #[must_use]
    pub fn into_results(self) -> Vec<RawDocument> {
        self.results.unwrap_or_default()
    }
}

/// A single document as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub agencies: Option<AgencyField>,
}

impl RawDocument {
    /// Maps the API field names onto the standard columns and injects the
    /// constant `country`/`source` values.
    #[must_use]
    pub fn into_record(self) -> Record {
        Record::new(
            self.publication_date,
            self.title,
            self.summary,
            self.agencies.as_ref().and_then(AgencyField::to_agency_string),
            self.html_url,
        )
    }
}

/// The `agencies` field: normally a list of agency objects, occasionally a
/// list of plain names or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AgencyField {
    List(Vec<AgencyEntry>),
    Single(String),
}

impl AgencyField {
    /// Comma-joined agency names, or `None` when no usable name is present.
    #[must_use]
    pub fn to_agency_string(&self) -> Option<String> {
        match self {
            Self::List(entries) => {
                join_agency_names(entries.iter().filter_map(AgencyEntry::name))
            }
            Self::Single(name) => join_agency_names([name]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AgencyEntry {
    Name(String),
    Detail(AgencyDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgencyDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub raw_name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl AgencyEntry {
    /// Display name: `name`, falling back to `raw_name` then `slug`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Detail(detail) => detail
                .name
                .as_deref()
                .or(detail.raw_name.as_deref())
                .or(detail.slug.as_deref()),
        }
    }
}
