//! Maintenance contract form (`/maintenance/contracts/`)

use super::{EntityKind, EntitySchema, FieldDefault, FieldSpec};
use crate::models::ReferenceKind;

const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("active", "Active"),
    ("completed", "Completed"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::reference("property", "Property", ReferenceKind::Properties).required(),
    FieldSpec::reference("supplier", "Supplier", ReferenceKind::Vendors).required(),
    FieldSpec::reference("unit", "Unit (Optional)", ReferenceKind::Units).depends_on("property"),
    FieldSpec::choice("status", "Status", STATUSES)
        .required()
        .default_to(FieldDefault::Text("draft")),
    FieldSpec::date("start_date", "Start Date").required(),
    FieldSpec::date("end_date", "End Date").required(),
    FieldSpec::amount("total_amount", "Total Amount").required(),
    FieldSpec::reference("prepaid_account", "Prepaid Account", ReferenceKind::Accounts).required(),
    FieldSpec::reference("expense_account", "Expense Account", ReferenceKind::Accounts).required(),
    FieldSpec::reference("supplier_account", "Supplier Account", ReferenceKind::Accounts).required(),
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::MaintenanceContract,
    name: "Maintenance contract",
    title: "Maintenance Contract",
    short_name: "contract",
    icon: "fas fa-file-contract",
    endpoint: "/maintenance/contracts/",
    list_route: "/maintenance/contracts",
    fields: FIELDS,
};
