//! Receipt voucher form (`/sales/receipt-vouchers/`)

use super::{Condition, EntityKind, EntitySchema, FieldDefault, FieldSpec};
use crate::models::ReferenceKind;

const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("cheque", "Cheque"),
    ("transfer", "Bank Transfer"),
    ("online", "Online Payment"),
];

const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("cleared", "Cleared"),
    ("bounced", "Bounced"),
];

// Cheque metadata stays editable for every method but only travels with cheques.
const BY_CHEQUE: &[Condition] = &[Condition::Equals("payment_method", "cheque")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::reference("lease", "Lease", ReferenceKind::ActiveLeases)
        .required()
        .locked_on_edit(),
    FieldSpec::reference("tenant", "Tenant", ReferenceKind::Tenants).required(),
    FieldSpec::date("payment_date", "Payment Date")
        .required()
        .default_to(FieldDefault::Today),
    FieldSpec::amount("amount", "Amount").required(),
    FieldSpec::choice("payment_method", "Payment Method", PAYMENT_METHODS)
        .required()
        .default_to(FieldDefault::Text("cash")),
    FieldSpec::choice("status", "Status", STATUSES).default_to(FieldDefault::Text("draft")),
    FieldSpec::text("bank_name", "Bank Name").send_when(BY_CHEQUE).omit_if_empty(),
    FieldSpec::text("cheque_number", "Cheque/Reference Number")
        .placeholder("Cheque/Transaction number")
        .send_when(BY_CHEQUE)
        .omit_if_empty(),
    FieldSpec::date("cheque_date", "Cheque Date").send_when(BY_CHEQUE).omit_if_empty(),
    FieldSpec::text("description", "Description").omit_if_empty(),
    FieldSpec::text_area("notes", "Notes")
        .placeholder("Additional notes")
        .omit_if_empty(),
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::ReceiptVoucher,
    name: "Receipt voucher",
    title: "Receipt Voucher",
    short_name: "receipt",
    icon: "fas fa-receipt",
    endpoint: "/sales/receipt-vouchers/",
    list_route: "/receipt-vouchers",
    fields: FIELDS,
};
