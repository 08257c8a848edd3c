//! Entity Schemas
//!
//! Declarative description of every record form: which fields exist, how
//! they are edited, when they show, and when they are sent.

mod lease_renewal;
mod lease_termination;
mod maintenance_contract;
mod maintenance_request;
mod receipt_voucher;

use crate::models::ReferenceKind;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Number { step: &'static str },
    Checkbox,
    /// Fixed `(value, label)` choices
    Choice(&'static [(&'static str, &'static str)]),
    /// Select filled from a reference list
    Reference(ReferenceKind),
}

/// Predicate on a sibling field of the same draft
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Sibling's text equals the value
    Equals(&'static str, &'static str),
    /// Sibling checkbox is set
    Checked(&'static str),
}

/// Initial value in create mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Empty,
    Text(&'static str),
    Zero,
    Unchecked,
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldDefault,
    /// Read-only once the record exists
    pub locked_on_edit: bool,
    /// All must hold for the field to be shown (and validated)
    pub visible_when: &'static [Condition],
    /// All must hold for the field to be sent
    pub send_when: &'static [Condition],
    /// Leave the key out of the payload when blank
    pub omit_if_empty: bool,
    /// Parent field whose value scopes this field's options
    pub depends_on: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    /// Spans the full form width
    pub wide: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: FieldDefault::Empty,
            locked_on_edit: false,
            visible_when: &[],
            send_when: &[],
            omit_if_empty: false,
            depends_on: None,
            placeholder: None,
            wide: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn text_area(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea).wide()
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Money amount with cent precision
    pub const fn amount(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number { step: "0.01" }).placeholder("0.00")
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Checkbox).default_to(FieldDefault::Unchecked)
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        choices: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(choices))
    }

    pub const fn reference(name: &'static str, label: &'static str, kind: ReferenceKind) -> Self {
        Self::new(name, label, FieldKind::Reference(kind))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_to(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    pub const fn locked_on_edit(mut self) -> Self {
        self.locked_on_edit = true;
        self
    }

    pub const fn visible_when(mut self, conditions: &'static [Condition]) -> Self {
        self.visible_when = conditions;
        self
    }

    pub const fn send_when(mut self, conditions: &'static [Condition]) -> Self {
        self.send_when = conditions;
        self
    }

    pub const fn omit_if_empty(mut self) -> Self {
        self.omit_if_empty = true;
        self
    }

    pub const fn depends_on(mut self, parent: &'static str) -> Self {
        self.depends_on = Some(parent);
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub const fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    pub fn reference_kind(&self) -> Option<ReferenceKind> {
        match self.kind {
            FieldKind::Reference(kind) => Some(kind),
            _ => None,
        }
    }
}

/// The five record forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    LeaseRenewal,
    LeaseTermination,
    MaintenanceContract,
    MaintenanceRequest,
    ReceiptVoucher,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::LeaseRenewal,
        EntityKind::LeaseTermination,
        EntityKind::MaintenanceContract,
        EntityKind::MaintenanceRequest,
        EntityKind::ReceiptVoucher,
    ];

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            EntityKind::LeaseRenewal => &lease_renewal::SCHEMA,
            EntityKind::LeaseTermination => &lease_termination::SCHEMA,
            EntityKind::MaintenanceContract => &maintenance_contract::SCHEMA,
            EntityKind::MaintenanceRequest => &maintenance_request::SCHEMA,
            EntityKind::ReceiptVoucher => &receipt_voucher::SCHEMA,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// Sentence-case name used in messages ("Lease renewal")
    pub name: &'static str,
    /// Title-case name used in headings and buttons ("Lease Renewal")
    pub title: &'static str,
    /// Short noun used when the record cannot be fetched ("renewal")
    pub short_name: &'static str,
    /// Font Awesome icon class for the heading
    pub icon: &'static str,
    /// Collection endpoint; items live at `<endpoint><id>/`
    pub endpoint: &'static str,
    /// Browser route of the list view
    pub list_route: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Reference lists loaded once on mount (dependent lists excluded)
    pub fn reference_lists(&self) -> Vec<ReferenceKind> {
        let mut kinds = Vec::new();
        for field in self.fields.iter().filter(|field| field.depends_on.is_none()) {
            if let Some(kind) = field.reference_kind() {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }

    /// Fields whose options are scoped by `parent`
    pub fn dependents_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'static FieldSpec> + 'a {
        self.fields.iter().filter(move |field| field.depends_on == Some(parent))
    }

    pub fn success_message(&self, updated: bool) -> String {
        let verb = if updated { "updated" } else { "created" };
        format!("{} {} successfully!", self.name, verb)
    }

    pub fn save_error_fallback(&self) -> String {
        format!("Error saving {}", self.name.to_lowercase())
    }

    pub fn fetch_error_message(&self) -> String {
        format!("Error fetching {} details", self.short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_unique_per_schema() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            assert_eq!(schema.kind, kind);
            for (i, field) in schema.fields.iter().enumerate() {
                assert!(
                    schema.fields[i + 1..].iter().all(|other| other.name != field.name),
                    "{} repeats {}",
                    schema.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_dependents_point_at_existing_fields() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            for field in schema.fields {
                if let Some(parent) = field.depends_on {
                    assert!(schema.field(parent).is_some(), "{}.{} has no parent", schema.name, field.name);
                }
                for condition in field.visible_when.iter().chain(field.send_when) {
                    let (Condition::Equals(sibling, _) | Condition::Checked(sibling)) = condition;
                    assert!(schema.field(sibling).is_some());
                }
            }
        }
    }

    #[test]
    fn test_reference_lists_skip_dependents_and_dedupe() {
        let contract = EntityKind::MaintenanceContract.schema();
        assert_eq!(
            contract.reference_lists(),
            vec![ReferenceKind::Properties, ReferenceKind::Vendors, ReferenceKind::Accounts]
        );
        let units: Vec<_> = contract.dependents_of("property").map(|field| field.name).collect();
        assert_eq!(units, vec!["unit"]);

        let voucher = EntityKind::ReceiptVoucher.schema();
        assert_eq!(voucher.reference_lists(), vec![ReferenceKind::ActiveLeases, ReferenceKind::Tenants]);
    }

    #[test]
    fn test_messages() {
        let renewal = EntityKind::LeaseRenewal.schema();
        assert_eq!(renewal.success_message(true), "Lease renewal updated successfully!");
        assert_eq!(renewal.success_message(false), "Lease renewal created successfully!");
        assert_eq!(renewal.save_error_fallback(), "Error saving lease renewal");
        assert_eq!(renewal.fetch_error_message(), "Error fetching renewal details");
    }
}
