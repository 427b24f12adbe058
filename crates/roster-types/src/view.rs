//! Display parameters and derived statistics for the contractor list.
//!
//! These types describe *how* the list is shown (search text, remarks
//! filter, sort column and direction). The projection itself lives in
//! `roster-core::view`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Column the displayed list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "sNo")]
    Serial,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "contactNo")]
    ContactNumber,
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "remarks")]
    Remarks,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Serial => write!(f, "serial"),
            SortField::Name => write!(f, "name"),
            SortField::ContactNumber => write!(f, "contact"),
            SortField::Address => write!(f, "address"),
            SortField::Remarks => write!(f, "remarks"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" | "sno" | "s_no" | "#" => Ok(SortField::Serial),
            "name" => Ok(SortField::Name),
            "contact" | "contactno" | "contact_number" | "phone" => Ok(SortField::ContactNumber),
            "address" => Ok(SortField::Address),
            "remarks" => Ok(SortField::Remarks),
            other => Err(format!("invalid sort field: '{other}'")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction: '{other}'")),
        }
    }
}

/// Current sort column and direction. Defaults to serial ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click semantics: the same field flips direction, a different
    /// field starts over ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Category filter over the remarks column.
///
/// Parsed from the selector value: `all`, `empty`, or any other text which is
/// matched as a case-insensitive substring of the remarks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemarksFilter {
    #[default]
    All,
    Empty,
    Contains(String),
}

impl fmt::Display for RemarksFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemarksFilter::All => write!(f, "all"),
            RemarksFilter::Empty => write!(f, "empty"),
            RemarksFilter::Contains(text) => write!(f, "{text}"),
        }
    }
}

impl FromStr for RemarksFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => RemarksFilter::All,
            "empty" => RemarksFilter::Empty,
            other => RemarksFilter::Contains(other.to_string()),
        })
    }
}

impl Serialize for RemarksFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RemarksFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let Ok(filter) = s.parse::<RemarksFilter>();
        Ok(filter)
    }
}

/// Everything the projector needs besides the records themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub remarks: RemarksFilter,
    #[serde(default)]
    pub sort: SortState,
}

/// Summary counters shown alongside the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStats {
    pub total: usize,
    pub displayed: usize,
    pub with_remarks: usize,
    /// Distinct non-blank remarks values in first-seen order.
    pub remark_categories: Vec<String>,
}
