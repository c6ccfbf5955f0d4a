use chrono::{NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single cell's value as held by a tabular store.
///
/// This is deliberately smaller than a full spreadsheet value model: no
/// arrays, no formulas, no error values. Template substitution renders every
/// variant through [`Display`], so the textual form here is the contract for
/// what ends up in a filled column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellValue {
    Int(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Absent or cleared cell. Renders as the empty string, never an error.
    Empty,
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Textual form used for template substitution. `Empty` yields `""`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_as_empty_string() {
        assert_eq!(CellValue::Empty.render(), "");
        assert!(CellValue::Empty.is_empty());
    }

    #[test]
    fn display_forms() {
        assert_eq!(CellValue::Int(42).render(), "42");
        assert_eq!(CellValue::Number(4.5).render(), "4.5");
        assert_eq!(CellValue::Text("Jan".into()).render(), "Jan");
        assert_eq!(CellValue::Boolean(true).render(), "TRUE");
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(CellValue::Date(d).render(), "2024-03-07");
    }
}
