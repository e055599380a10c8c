//! Record filtering and the distinct values that populate filter selectors.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::record::{Field, ProspectRecord};

/// Exact-match filter on company, winning touch and lead source.
///
/// Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub company: Option<String>,
    pub winning_touch: Option<String>,
    pub lead_source: Option<String>,
}

impl RecordFilter {
    /// True when no criterion is set (or all are blank).
    pub fn is_empty(&self) -> bool {
        self.criteria().next().is_none()
    }

    fn criteria(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Company, self.company.as_deref()),
            (Field::WinningTouch, self.winning_touch.as_deref()),
            (Field::LeadSource, self.lead_source.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (field, v))
        })
    }

    pub fn matches(&self, record: &ProspectRecord) -> bool {
        self.criteria()
            .all(|(field, expected)| record.text(field) == expected)
    }

    /// Records passing the filter, in input order.
    pub fn apply<'a>(&self, records: &'a [ProspectRecord]) -> Vec<&'a ProspectRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct non-empty values per filterable column, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub winning_touches: Vec<String>,
    pub lead_sources: Vec<String>,
}

impl FilterOptions {
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProspectRecord>,
    {
        let records: Vec<&ProspectRecord> = records.into_iter().collect();
        Self {
            companies: distinct(&records, Field::Company),
            winning_touches: distinct(&records, Field::WinningTouch),
            lead_sources: distinct(&records, Field::LeadSource),
        }
    }
}

fn distinct(records: &[&ProspectRecord], field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let value = record.text(field);
        if !value.is_empty() && seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact(company: &str, source: &str, winning: &str) -> ProspectRecord {
        ProspectRecord::new()
            .with_field(Field::FirstName, "X")
            .with_field(Field::Company, company)
            .with_field(Field::LeadSource, source)
            .with_field(Field::WinningTouch, winning)
    }

    fn sample() -> Vec<ProspectRecord> {
        vec![
            contact("Acme", "LinkedIn", "Touch 2"),
            contact("Globex", "Evento", ""),
            contact("Acme", "Evento", "Touch 4"),
            contact(" Initech ", "", "Touch 2"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = sample();
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).len(), records.len());
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let filter = RecordFilter {
            company: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(filter.is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let records = sample();
        let filter = RecordFilter {
            company: Some("Acme".to_string()),
            lead_source: Some("Evento".to_string()),
            winning_touch: None,
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text(Field::WinningTouch), "Touch 4");
    }

    #[test]
    fn test_match_uses_trimmed_text() {
        let records = sample();
        let filter = RecordFilter {
            company: Some("Initech".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }

    #[test]
    fn test_filter_options_first_seen_order() {
        let records = sample();
        let options = FilterOptions::collect(&records);
        assert_eq!(options.companies, vec!["Acme", "Globex", "Initech"]);
        assert_eq!(options.winning_touches, vec!["Touch 2", "Touch 4"]);
        assert_eq!(options.lead_sources, vec!["LinkedIn", "Evento"]);
    }
}
