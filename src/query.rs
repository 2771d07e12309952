use crate::campus::{self, Campus};
use crate::Error;

const BASE: [(&str, &str); 4] = [
    ("page", "1"),
    ("sidx", "EAW_LST_NAM"),
    ("startSal", "0"),
    ("endSal", "9999999"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            s => Err(Error::SortOrder(s.to_owned())),
        }
    }
}

/// Optional fields that replace the defaults of a salaries request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub rows: Option<u64>,
    pub page: Option<u32>,
    pub sord: Option<SortOrder>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Ordered form fields posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(&'static str, String)>,
}

impl Payload {
    fn base() -> Self {
        Self {
            fields: BASE.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    /// Payload for the record count request. Location and year are only
    /// sent when both are ones the site knows about.
    pub fn count(location: &str, year: i32) -> Self {
        let mut p = Self::base();
        if Campus::is_known(location) && campus::is_valid_year(year) {
            p.set("location", location);
            p.set("year", year.to_string());
        }
        p
    }

    /// Payload for the full result set of `rows` records.
    pub fn salaries(location: &str, year: i32, rows: &str, overrides: &Overrides) -> Self {
        let mut p = Self::base();
        p.set("location", location);
        p.set("year", year.to_string());
        p.set("rows", rows);
        if let Some(rows) = overrides.rows {
            p.set("rows", rows.to_string());
        }
        if let Some(page) = overrides.page {
            p.set("page", page.to_string());
        }
        if let Some(sord) = overrides.sord {
            p.set("sord", sord.as_str());
        }
        if let Some(name) = &overrides.firstname {
            p.set("firstname", name.as_str());
        }
        if let Some(name) = &overrides.lastname {
            p.set("lastname", name.as_str());
        }
        p
    }

    pub fn set<V: Into<String>>(&mut self, key: &'static str, value: V) {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }
}
