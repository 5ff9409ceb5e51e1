#![deny(unsafe_code)]

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::numeric::{format_numeric, lenient_f64};

/// A raw spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// String representation used for display, search and export.
    pub fn as_display(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(value) => Cow::Owned(format_numeric(*value)),
            Self::Empty => Cow::Borrowed(""),
        }
    }

    /// Numeric value, with anything unparsable read as 0.
    pub fn as_f64_lenient(&self) -> f64 {
        match self {
            Self::Number(value) if value.is_nan() => 0.0,
            Self::Number(value) => *value,
            Self::Text(text) => lenient_f64(text),
            Self::Empty => 0.0,
        }
    }

    /// Yes/no reading: text `true`/`yes` (any case) or the number 1.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Text(text) => {
                let text = text.trim();
                text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes")
            }
            Self::Number(value) => *value == 1.0,
            Self::Empty => false,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
            Self::Empty => true,
        }
    }
}

/// Header-keyed cells of one spreadsheet row, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    fields: Vec<(String, CellValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell; a repeated header replaces the earlier value in place.
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        let header = header.into();
        match self.fields.iter_mut().find(|(name, _)| *name == header) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, CellValue)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (H, CellValue)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (header, value) in iter {
            map.insert(header, value);
        }
        map
    }
}

/// One candidate row as loaded from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// 1-based position in the source file.
    pub row_number: usize,
    pub fields: FieldMap,
}

impl Record {
    pub fn new(id: RecordId, row_number: usize, fields: FieldMap) -> Self {
        Self {
            id,
            row_number,
            fields,
        }
    }

    /// Cell under an optional (possibly unbound) header.
    pub fn value(&self, header: Option<&str>) -> Option<&CellValue> {
        header.and_then(|header| self.fields.get(header))
    }

    /// Display text under an optional header; unbound or missing reads as "".
    pub fn text(&self, header: Option<&str>) -> Cow<'_, str> {
        self.value(header)
            .map_or(Cow::Borrowed(""), CellValue::as_display)
    }

    /// Numeric value under an optional header; unbound or unparsable reads as 0.
    pub fn number(&self, header: Option<&str>) -> f64 {
        self.value(header).map_or(0.0, CellValue::as_f64_lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_display_and_numbers() {
        assert_eq!(CellValue::Number(8.0).as_display(), "8");
        assert_eq!(CellValue::Text("7.5/10".into()).as_f64_lenient(), 7.5);
        assert_eq!(CellValue::Empty.as_f64_lenient(), 0.0);
        assert_eq!(CellValue::Number(f64::NAN).as_f64_lenient(), 0.0);
    }

    #[test]
    fn cell_flags() {
        assert!(CellValue::Text("Yes".into()).as_flag());
        assert!(CellValue::Text("TRUE".into()).as_flag());
        assert!(CellValue::Number(1.0).as_flag());
        assert!(!CellValue::Number(0.0).as_flag());
        assert!(!CellValue::Text("no".into()).as_flag());
        assert!(!CellValue::Text("1".into()).as_flag());
        assert!(!CellValue::Empty.as_flag());
    }

    #[test]
    fn field_map_keeps_order_and_replaces_duplicates() {
        let mut map = FieldMap::new();
        map.insert("B", CellValue::Number(2.0));
        map.insert("A", CellValue::Number(1.0));
        map.insert("B", CellValue::Number(3.0));
        let headers: Vec<&str> = map.headers().collect();
        assert_eq!(headers, vec!["B", "A"]);
        assert_eq!(map.get("B"), Some(&CellValue::Number(3.0)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn record_reads_unbound_headers_as_empty() {
        let fields: FieldMap = [("Name", CellValue::Text("Ann".into()))]
            .into_iter()
            .collect();
        let record = Record::new(RecordId::derive("t", 1, 1), 1, fields);
        assert_eq!(record.text(None), "");
        assert_eq!(record.text(Some("Missing")), "");
        assert_eq!(record.text(Some("Name")), "Ann");
        assert_eq!(record.number(None), 0.0);
    }
}
