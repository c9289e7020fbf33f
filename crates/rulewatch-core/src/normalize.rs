//! Normalization of collected tables into the standard schema.

use crate::record::{Record, Table, COUNTRY, SOURCE};

/// Trims every text column and converts blank values to the null marker.
///
/// The column set and order are fixed by [`Record`], so the output always has
/// exactly the standard columns. Blank `country`/`source` values are reset to
/// their constants.
#[must_use]
pub fn normalize(table: &Table) -> Table {
    table.iter().map(normalize_record).collect()
}

fn normalize_record(record: &Record) -> Record {
    Record {
        country: constant_or(&record.country, COUNTRY),
        source: constant_or(&record.source, SOURCE),
        date: clean(record.date.as_deref()),
        title: clean(record.title.as_deref()),
        summary: clean(record.summary.as_deref()),
        agency: clean(record.agency.as_deref()),
        url: clean(record.url.as_deref()),
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn constant_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: Option<&str>, summary: Option<&str>) -> Record {
        Record::new(
            Some(" 2024-05-01 ".to_string()),
            title.map(str::to_string),
            summary.map(str::to_string),
            Some("  Environmental Protection Agency ".to_string()),
            Some("https://www.federalregister.gov/d/2024-1 ".to_string()),
        )
    }

    #[test]
    fn trims_text_columns() {
        let table = Table::new(vec![raw(Some("  Air Quality Plans\t"), Some(" summary "))]);
        let out = normalize(&table);
        let record = &out.records()[0];
        assert_eq!(record.title.as_deref(), Some("Air Quality Plans"));
        assert_eq!(record.summary.as_deref(), Some("summary"));
        assert_eq!(
            record.agency.as_deref(),
            Some("Environmental Protection Agency")
        );
        assert_eq!(
            record.url.as_deref(),
            Some("https://www.federalregister.gov/d/2024-1")
        );
        assert_eq!(record.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn blank_values_become_null() {
        let table = Table::new(vec![raw(Some("   "), Some(""))]);
        let out = normalize(&table);
        assert_eq!(out.records()[0].title, None);
        assert_eq!(out.records()[0].summary, None);
    }

    #[test]
    fn restores_blank_constant_columns() {
        let mut record = raw(Some("t"), None);
        record.country = String::new();
        record.source = " ".to_string();
        let out = normalize(&Table::new(vec![record]));
        assert_eq!(out.records()[0].country, COUNTRY);
        assert_eq!(out.records()[0].source, SOURCE);
    }

    #[test]
    fn preserves_row_count_and_order() {
        let table = Table::new(vec![raw(Some("b"), None), raw(Some("a"), None)]);
        let out = normalize(&table);
        assert_eq!(out.len(), 2);
        assert_eq!(out.records()[0].title.as_deref(), Some("b"));
    }
}
