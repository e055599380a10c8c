//! Contact search over name, company and title.

use crate::classify::classify_stage;
use crate::record::{Field, ProspectRecord};
use crate::types::SearchHit;

const SEARCH_FIELDS: [Field; 4] = [Field::FirstName, Field::LastName, Field::Company, Field::Title];

/// Case-insensitive substring search.
///
/// Queries shorter than `min_chars` characters return nothing. At most
/// `limit` hits are returned, in input order.
pub fn search(records: &[ProspectRecord], query: &str, min_chars: usize, limit: usize) -> Vec<SearchHit> {
    let query = query.trim();
    if query.chars().count() < min_chars {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            SEARCH_FIELDS
                .iter()
                .any(|field| record.lower(*field).contains(&needle))
        })
        .take(limit)
        .map(|(index, record)| {
            let stage = classify_stage(record);
            let outcome = record.text(Field::Outcome);
            SearchHit {
                index,
                name: record.display_name(),
                company: record.text(Field::Company),
                title: record.text(Field::Title),
                stage,
                status: if outcome.is_empty() {
                    stage.label().to_string()
                } else {
                    outcome
                },
            }
        })
        .collect()
}
