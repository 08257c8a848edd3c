//! Lease termination form (`/property/lease-terminations/`)

use super::{Condition, EntityKind, EntitySchema, FieldDefault, FieldSpec};
use crate::models::ReferenceKind;

const TERMINATION_TYPES: &[(&str, &str)] = &[
    ("normal", "Normal Termination"),
    ("early", "Early Termination"),
];

const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("pending_approval", "Pending Approval"),
    ("approved", "Approved"),
    ("completed", "Completed"),
    ("rejected", "Rejected"),
    ("cancelled", "Cancelled"),
];

const EARLY: &[Condition] = &[Condition::Equals("termination_type", "early")];
const EARLY_WITH_CHEQUES: &[Condition] = &[
    Condition::Equals("termination_type", "early"),
    Condition::Checked("post_dated_cheques_adjusted"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::reference("lease", "Lease", ReferenceKind::ActiveLeases)
        .required()
        .locked_on_edit(),
    FieldSpec::choice("termination_type", "Termination Type", TERMINATION_TYPES)
        .required()
        .default_to(FieldDefault::Text("normal")),
    FieldSpec::date("termination_date", "Termination Date").required(),
    FieldSpec::amount("original_security_deposit", "Original Security Deposit").required(),
    FieldSpec::amount("refundable_amount", "Refundable Amount").required(),
    FieldSpec::amount("maintenance_charges", "Maintenance Charges").default_to(FieldDefault::Zero),
    // Early termination section
    FieldSpec::amount("unearned_rent", "Unearned Rent")
        .default_to(FieldDefault::Zero)
        .visible_when(EARLY),
    FieldSpec::amount("early_termination_penalty", "Early Termination Penalty")
        .default_to(FieldDefault::Zero)
        .visible_when(EARLY),
    FieldSpec::checkbox("post_dated_cheques_adjusted", "Post-dated cheques adjusted").visible_when(EARLY),
    FieldSpec::text_area("post_dated_cheques_notes", "Post-dated Cheques Notes").visible_when(EARLY_WITH_CHEQUES),
    FieldSpec::text_area("terms_conditions", "Terms & Conditions"),
    FieldSpec::text_area("exit_notes", "Exit Notes"),
    FieldSpec::text_area("notes", "Notes"),
    FieldSpec::choice("status", "Status", STATUSES).default_to(FieldDefault::Text("draft")),
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::LeaseTermination,
    name: "Lease termination",
    title: "Lease Termination",
    short_name: "termination",
    icon: "fas fa-ban",
    endpoint: "/property/lease-terminations/",
    list_route: "/lease-termination",
    fields: FIELDS,
};
