use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Permanent identity of a contractor record.
///
/// Assigned once at creation and independent of display order. Serialized as
/// a bare integer so previously stored slots keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractorId(pub i64);

impl ContractorId {
    /// The id handed to the first record of an empty registry.
    pub const FIRST: ContractorId = ContractorId(1);

    /// The id following this one, or `None` once `i64::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ContractorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContractorId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A contractor in the registry.
///
/// Field names on the wire follow the persisted slot layout
/// (`sNo`, `contactNo`) so an existing slot can be loaded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: ContractorId,
    /// 1-based position in storage order. Recomputed after every insert/delete.
    #[serde(rename = "sNo")]
    pub serial: u32,
    pub name: String,
    #[serde(rename = "contactNo")]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub remarks: String,
}

impl Contractor {
    /// Whether the record carries a non-blank remark.
    pub fn has_remarks(&self) -> bool {
        !self.remarks.trim().is_empty()
    }

    /// Replace the content fields, leaving `id` and `serial` untouched.
    pub fn apply(&mut self, input: ContractorInput) {
        self.name = input.name;
        self.contact_number = input.contact_number;
        self.address = input.address;
        self.remarks = input.remarks;
    }
}

/// Content fields submitted when creating or editing a contractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "contactNo", default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub remarks: String,
}

impl ContractorInput {
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        address: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact_number: contact_number.into(),
            address: address.into(),
            remarks: remarks.into(),
        }
    }

    /// Copy of this input with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            address: self.address.trim().to_string(),
            remarks: self.remarks.trim().to_string(),
        }
    }
}

impl From<&Contractor> for ContractorInput {
    fn from(c: &Contractor) -> Self {
        Self {
            name: c.name.clone(),
            contact_number: c.contact_number.clone(),
            address: c.address.clone(),
            remarks: c.remarks.clone(),
        }
    }
}

/// The content fields a validation message can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractorField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "contactNo")]
    ContactNumber,
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "remarks")]
    Remarks,
}

impl fmt::Display for ContractorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractorField::Name => write!(f, "name"),
            ContractorField::ContactNumber => write!(f, "contactNo"),
            ContractorField::Address => write!(f, "address"),
            ContractorField::Remarks => write!(f, "remarks"),
        }
    }
}
