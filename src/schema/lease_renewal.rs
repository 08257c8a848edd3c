//! Lease renewal form (`/property/lease-renewals/`)

use super::{EntityKind, EntitySchema, FieldDefault, FieldSpec};
use crate::models::ReferenceKind;

const BILLING_CYCLES: &[(&str, &str)] = &[
    ("monthly", "Monthly"),
    ("quarterly", "Quarterly"),
    ("semi_annual", "Semi-Annual"),
    ("annual", "Annual"),
];

// The `original_*` fields describe the lease being renewed and freeze once saved.
const FIELDS: &[FieldSpec] = &[
    FieldSpec::reference("original_lease", "Original Lease", ReferenceKind::ActiveLeases)
        .required()
        .locked_on_edit(),
    FieldSpec::choice("billing_cycle", "Billing Cycle", BILLING_CYCLES)
        .required()
        .default_to(FieldDefault::Text("monthly")),
    FieldSpec::date("original_start_date", "Original Start Date").required().locked_on_edit(),
    FieldSpec::date("original_end_date", "Original End Date").required().locked_on_edit(),
    FieldSpec::amount("original_monthly_rent", "Original Monthly Rent").required().locked_on_edit(),
    FieldSpec::date("new_start_date", "New Start Date").required(),
    FieldSpec::date("new_end_date", "New End Date").required(),
    FieldSpec::amount("new_monthly_rent", "New Monthly Rent").required(),
    FieldSpec::text_area("special_terms", "Special Terms"),
    FieldSpec::text_area("notes", "Notes"),
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::LeaseRenewal,
    name: "Lease renewal",
    title: "Lease Renewal",
    short_name: "renewal",
    icon: "fas fa-sync-alt",
    endpoint: "/property/lease-renewals/",
    list_route: "/lease-renewal",
    fields: FIELDS,
};
