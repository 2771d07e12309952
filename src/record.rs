use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

pub const HEADER: [&str; 10] = [
    "Id",
    "Year",
    "Location",
    "FirstName",
    "LastName",
    "Title",
    "GrossPay",
    "RegularPay",
    "OvertimePay",
    "OtherPay",
];

/// One employee's disclosure entry, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    cells: Vec<String>,
}

impl Record {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    fn from_row(row: Value) -> Result<Self> {
        match row {
            Value::Object(mut obj) => match obj.remove("cell") {
                Some(Value::Array(cells)) => {
                    Ok(Self::new(cells.into_iter().map(cell_text).collect()))
                }
                _ => Err(Error::MissingField("cell")),
            },
            _ => Err(Error::MissingField("cell")),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    fn field(&self, ix: usize) -> &str {
        self.cells.get(ix).map(String::as_str).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.field(0)
    }

    pub fn year(&self) -> &str {
        self.field(1)
    }

    pub fn location(&self) -> &str {
        self.field(2)
    }

    pub fn first_name(&self) -> &str {
        self.field(3)
    }

    pub fn last_name(&self) -> &str {
        self.field(4)
    }

    pub fn title(&self) -> &str {
        self.field(5)
    }

    pub fn gross_pay(&self) -> &str {
        self.field(6)
    }

    pub fn regular_pay(&self) -> &str {
        self.field(7)
    }

    pub fn overtime_pay(&self) -> &str {
        self.field(8)
    }

    pub fn other_pay(&self) -> &str {
        self.field(9)
    }
}

fn cell_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        v => v.to_string(),
    }
}

/// Lazy sequence of records from a search response. Rows are only turned
/// into records as the iterator is advanced.
#[derive(Debug)]
pub struct Salaries {
    rows: std::vec::IntoIter<Value>,
    written: Option<PathBuf>,
}

impl Salaries {
    pub(crate) fn new(rows: Vec<Value>) -> Self {
        Self {
            rows: rows.into_iter(),
            written: None,
        }
    }

    /// The CSV file these rows were written to, if any.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    pub(crate) fn mark_written(&mut self, path: PathBuf) {
        self.written = Some(path);
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Pulls the `rows` array out of a parsed search response.
    pub(crate) fn from_response(response: Value) -> Result<Self> {
        match response {
            Value::Object(mut obj) => match obj.remove("rows") {
                Some(Value::Array(rows)) => Ok(Self::new(rows)),
                _ => Err(Error::MissingField("rows")),
            },
            _ => Err(Error::MissingField("rows")),
        }
    }
}

impl Iterator for Salaries {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(Record::from_row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// Parses a response body that may use single quotes in place of double
/// quotes. Every `'` becomes `"`; anything else must be valid JSON.
pub fn parse_quoted(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(&text.replace('\'', "\""))?)
}

/// Like [`parse_quoted`], but raw control characters inside strings are
/// escaped so that they are accepted.
pub fn parse_loose(text: &str) -> Result<Value> {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in text.chars() {
        let c = if c == '\'' { '"' } else { c };
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            } else if (c as u32) < 0x20 {
                out.push_str(&format!("\\u{:04x}", c as u32));
                continue;
            }
        } else if c == '"' {
            in_string = true;
        }
        out.push(c);
    }
    Ok(serde_json::from_str(&out)?)
}
