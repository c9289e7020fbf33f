//! The fixed tabular schema shared by every pipeline stage.
//!
//! A [`Record`] is one proposed-rule notice. Every record carries the same
//! seven columns in [`STANDARD_COLUMNS`] order; fields that may be absent
//! upstream are `Option<String>` so the null marker is explicit in the type
//! rather than inferred from the data.

use serde::{Deserialize, Serialize};

use crate::dates::DateField;

/// Value injected into the `country` column of every record.
pub const COUNTRY: &str = "US";

/// Value injected into the `source` column of every record.
pub const SOURCE: &str = "Federal Register";

/// Column names in output order.
pub const STANDARD_COLUMNS: [&str; 7] = [
    "country", "source", "date", "title", "summary", "agency", "url",
];

/// One proposed-rule notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub source: String,
    /// Publication date as delivered upstream; may be malformed.
    pub date: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub agency: Option<String>,
    pub url: Option<String>,
}

impl Record {
    /// Builds a record with the constant `country`/`source` columns filled in.
    #[must_use]
    pub fn new(
        date: Option<String>,
        title: Option<String>,
        summary: Option<String>,
        agency: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            country: COUNTRY.to_string(),
            source: SOURCE.to_string(),
            date,
            title,
            summary,
            agency,
            url,
        }
    }

    /// Leniently parses the `date` column.
    #[must_use]
    pub fn parsed_date(&self) -> DateField {
        DateField::parse(self.date.as_deref())
    }

    /// Returns the value of the named standard column, or `None` if the
    /// column is null (or the name is not a standard column).
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&str> {
        match name {
            "country" => Some(self.country.as_str()),
            "source" => Some(self.source.as_str()),
            "date" => self.date.as_deref(),
            "title" => self.title.as_deref(),
            "summary" => self.summary.as_deref(),
            "agency" => self.agency.as_deref(),
            "url" => self.url.as_deref(),
            _ => None,
        }
    }
}

/// An ordered sequence of records in collection order (newest first as
/// returned by the API).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Joins agency names into the single `agency` column value.
///
/// Blank names are skipped; returns `None` when nothing remains.
#[must_use]
pub fn join_agency_names<I, S>(names: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = names
        .into_iter()
        .filter_map(|n| {
            let trimmed = n.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_injects_constant_columns() {
        let record = Record::new(None, Some("Title".to_string()), None, None, None);
        assert_eq!(record.country, "US");
        assert_eq!(record.source, "Federal Register");
    }

    #[test]
    fn column_lookup_follows_standard_names() {
        let record = Record::new(
            Some("2024-01-01".to_string()),
            Some("Title".to_string()),
            None,
            Some("Environmental Protection Agency".to_string()),
            Some("https://example.gov/doc".to_string()),
        );
        assert_eq!(record.column("date"), Some("2024-01-01"));
        assert_eq!(record.column("summary"), None);
        assert_eq!(record.column("country"), Some("US"));
        assert_eq!(record.column("nonexistent"), None);
    }

    #[test]
    fn join_agency_names_skips_blank_entries() {
        let joined = join_agency_names(["Environmental Protection Agency", "  ", "Army"]);
        assert_eq!(
            joined.as_deref(),
            Some("Environmental Protection Agency, Army")
        );
    }

    #[test]
    fn join_agency_names_empty_is_none() {
        assert_eq!(join_agency_names(Vec::<String>::new()), None);
        assert_eq!(join_agency_names([""]), None);
    }

    #[test]
    fn table_preserves_collection_order() {
        let table: Table = ["b", "a", "c"]
            .into_iter()
            .map(|t| Record::new(None, Some(t.to_string()), None, None, None))
            .collect();
        let titles: Vec<_> = table.iter().filter_map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
        assert_eq!(table.len(), 3);
    }
}
