//! Frontend Models
//!
//! Reference data returned by the back-office API and the option lists
//! derived from it.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Lease data structure (matches backend list serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: u32,
    #[serde(default)]
    pub lease_number: String,
    #[serde(default)]
    pub tenant_name: String,
    #[serde(default)]
    pub unit_number: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub property_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u32,
    #[serde(default)]
    pub unit_number: String,
}

/// Tenant or vendor (`/property/related-parties/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedParty {
    pub id: u32,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl RelatedParty {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Vendor label: name, else email, else a numbered placeholder
    pub fn vendor_label(&self) -> String {
        let name = self.full_name();
        if !name.is_empty() {
            return name;
        }
        match self.email.as_deref().filter(|email| !email.is_empty()) {
            Some(email) => email.to_string(),
            None => format!("Vendor #{}", self.id),
        }
    }
}

/// Chart-of-accounts entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u32,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_name: String,
}

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

impl From<Lease> for SelectOption {
    fn from(lease: Lease) -> Self {
        let label = format!("{} - {} ({})", lease.lease_number, lease.tenant_name, lease.unit_number);
        SelectOption::new(lease.id, label)
    }
}

impl From<Property> for SelectOption {
    fn from(property: Property) -> Self {
        let label = format!("{} ({})", property.name, property.property_code);
        SelectOption::new(property.id, label)
    }
}

impl From<Unit> for SelectOption {
    fn from(unit: Unit) -> Self {
        SelectOption::new(unit.id, unit.unit_number)
    }
}

impl From<Account> for SelectOption {
    fn from(account: Account) -> Self {
        let label = format!("{} - {}", account.account_number, account.account_name);
        SelectOption::new(account.id, label)
    }
}

/// Lookup lists a form can draw its select options from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Leases with `status == "active"`
    ActiveLeases,
    Properties,
    /// Units of one property; needs the parent property id
    Units,
    Tenants,
    Vendors,
    Accounts,
}

impl ReferenceKind {
    /// API path for this list. `parent` is only used by `Units`.
    pub fn path(self, parent: Option<&str>) -> String {
        match self {
            ReferenceKind::ActiveLeases => "/property/leases/".to_string(),
            ReferenceKind::Properties => "/property/properties/".to_string(),
            ReferenceKind::Units => {
                let parent = parent.unwrap_or_default();
                format!("/property/units/?property={}", utf8_percent_encode(parent, NON_ALPHANUMERIC))
            }
            ReferenceKind::Tenants => "/property/related-parties/".to_string(),
            ReferenceKind::Vendors => "/property/related-parties/?party_type=vendor".to_string(),
            ReferenceKind::Accounts => "/accounts/accounts/".to_string(),
        }
    }

    /// Placeholder shown as the empty first option
    pub fn placeholder(self) -> &'static str {
        match self {
            ReferenceKind::ActiveLeases => "Select Lease",
            ReferenceKind::Properties => "Select Property",
            ReferenceKind::Units => "Select Unit",
            ReferenceKind::Tenants => "Select Tenant",
            ReferenceKind::Vendors => "Select Supplier",
            ReferenceKind::Accounts => "Select Account",
        }
    }
}
