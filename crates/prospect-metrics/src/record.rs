//! Prospect records and the fixed spreadsheet schema.
//!
//! A [`ProspectRecord`] is one row of the prospecting spreadsheet: a loose
//! mapping from header name to cell value. Nothing about a record is stored
//! beyond what the sheet contains; status is always derived.
//!
//! Columns are addressed through [`Field`], never through formatted strings.
//! The touch cadence is the fixed [`TOUCH_SEQUENCE`] table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::{as_lower_text, as_text};

// =============================================================================
// Cell Values
// =============================================================================

/// A single spreadsheet cell as delivered by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

// =============================================================================
// Fields
// =============================================================================

/// Every column the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Company,
    Title,
    LeadSource,
    Touch1,
    Touch2,
    Touch3,
    Touch4,
    Touch5,
    Touch6,
    Touch7,
    ConnectionDate,
    ResponseDate,
    /// Scheduled date for touch 2.
    NextTouch,
    /// Scheduled date for touch 3.
    ThirdTouch,
    FourthTouch,
    FifthTouch,
    SixthTouch,
    SeventhTouch,
    Response,
    Outcome,
    WinningTouch,
}

impl Field {
    /// Header as it appears in the source spreadsheet.
    pub fn header(self) -> &'static str {
        self.headers()[0]
    }

    /// Canonical header followed by accepted aliases, in lookup order.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Field::FirstName => &["Nome", "First Name"],
            Field::LastName => &["Sobrenome", "Last Name"],
            Field::Company => &["Empresa", "Company"],
            Field::Title => &["Cargo", "Title"],
            Field::LeadSource => &["Origem", "Lead Source", "Source"],
            Field::Touch1 => &["Touch 1"],
            Field::Touch2 => &["Touch 2"],
            Field::Touch3 => &["Touch 3"],
            Field::Touch4 => &["Touch 4"],
            Field::Touch5 => &["Touch 5"],
            Field::Touch6 => &["Touch 6"],
            Field::Touch7 => &["Touch 7"],
            Field::ConnectionDate => &["Data Conexão", "Connection Date"],
            Field::ResponseDate => &["Data de Resposta", "Response Date"],
            Field::NextTouch => &["Próximo Touch", "Next Touch"],
            Field::ThirdTouch => &["Terceiro Touch", "Third Touch"],
            Field::FourthTouch => &["Quarto Touch", "Fourth Touch"],
            Field::FifthTouch => &["Quinto Touch", "Fifth Touch"],
            Field::SixthTouch => &["Sexto Touch", "Sixth Touch"],
            Field::SeventhTouch => &["Sétimo Touch", "Seventh Touch"],
            Field::Response => &["Resposta", "Response"],
            Field::Outcome => &["Resultado", "Outcome"],
            Field::WinningTouch => &["Touch Vencedor", "Winning Touch"],
        }
    }
}

// =============================================================================
// Touch Cadence
// =============================================================================

/// The seven touch slots in ascending order.
pub const TOUCH_SLOTS: [Field; 7] = [
    Field::Touch1,
    Field::Touch2,
    Field::Touch3,
    Field::Touch4,
    Field::Touch5,
    Field::Touch6,
    Field::Touch7,
];

/// One step of the follow-up cadence: a touch slot and the column holding
/// the date it is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchStep {
    pub slot: Field,
    pub date_field: Field,
    pub label: &'static str,
    pub num: u8,
}

/// Touches 2 through 7 with their scheduling columns. Touch 1 is never
/// pending, so it has no entry.
pub const TOUCH_SEQUENCE: [TouchStep; 6] = [
    TouchStep { slot: Field::Touch2, date_field: Field::NextTouch, label: "Touch 2", num: 2 },
    TouchStep { slot: Field::Touch3, date_field: Field::ThirdTouch, label: "Touch 3", num: 3 },
    TouchStep { slot: Field::Touch4, date_field: Field::FourthTouch, label: "Touch 4", num: 4 },
    TouchStep { slot: Field::Touch5, date_field: Field::FifthTouch, label: "Touch 5", num: 5 },
    TouchStep { slot: Field::Touch6, date_field: Field::SixthTouch, label: "Touch 6", num: 6 },
    TouchStep { slot: Field::Touch7, date_field: Field::SeventhTouch, label: "Touch 7", num: 7 },
];

/// Label for touch number `num` (1-based).
pub fn touch_label(num: usize) -> String {
    format!("Touch {}", num)
}

// =============================================================================
// Records
// =============================================================================

/// One row of the prospecting spreadsheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProspectRecord {
    cells: HashMap<String, CellValue>,
}

impl ProspectRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(header, value);
        self
    }

    /// Builder-style insert keyed by [`Field`] (canonical header).
    pub fn with_field(self, field: Field, value: impl Into<CellValue>) -> Self {
        self.with(field.header(), value)
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Raw cell for a header, if the key is present.
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    /// Raw cell for a field: canonical header first, then aliases.
    pub fn cell(&self, field: Field) -> Option<&CellValue> {
        field.headers().iter().find_map(|h| self.cells.get(*h))
    }

    /// Normalised text of a field (see [`as_text`]).
    pub fn text(&self, field: Field) -> String {
        as_text(self.cell(field))
    }

    /// Lowercased normalised text of a field.
    pub fn lower(&self, field: Field) -> String {
        as_lower_text(self.cell(field))
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.text(field).is_empty()
    }

    /// First and last name joined, skipping empty parts.
    pub fn display_name(&self) -> String {
        let first = self.text(Field::FirstName);
        let last = self.text(Field::LastName);
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{} {}", first, last),
            (false, true) => first,
            (true, false) => last,
            (true, true) => String::new(),
        }
    }

    /// Whether any cell holds a non-blank value.
    pub fn has_content(&self) -> bool {
        self.cells.values().any(|v| !as_text(Some(v)).is_empty())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for ProspectRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = ProspectRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
