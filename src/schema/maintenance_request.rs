//! Maintenance request form (`/maintenance/requests/`)

use super::{EntityKind, EntitySchema, FieldDefault, FieldSpec};
use crate::models::ReferenceKind;

const REQUEST_TYPES: &[(&str, &str)] = &[
    ("plumbing", "Plumbing"),
    ("electrical", "Electrical"),
    ("hvac", "HVAC"),
    ("carpentry", "Carpentry"),
    ("general", "General"),
    ("other", "Other"),
];

const PRIORITIES: &[(&str, &str)] = &[("low", "Low"), ("medium", "Medium"), ("high", "High")];

const STATUSES: &[(&str, &str)] = &[
    ("open", "Open"),
    ("in_progress", "In Progress"),
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::reference("property", "Property", ReferenceKind::Properties).required(),
    FieldSpec::reference("unit", "Unit", ReferenceKind::Units)
        .required()
        .depends_on("property"),
    FieldSpec::choice("request_type", "Request Type", REQUEST_TYPES)
        .required()
        .default_to(FieldDefault::Text("plumbing")),
    FieldSpec::choice("priority", "Priority", PRIORITIES)
        .required()
        .default_to(FieldDefault::Text("medium")),
    FieldSpec::choice("status", "Status", STATUSES)
        .required()
        .default_to(FieldDefault::Text("open")),
    FieldSpec::text_area("description", "Description").required(),
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::MaintenanceRequest,
    name: "Maintenance request",
    title: "Maintenance Request",
    short_name: "request",
    icon: "fas fa-wrench",
    endpoint: "/maintenance/requests/",
    list_route: "/maintenance/requests",
    fields: FIELDS,
};
