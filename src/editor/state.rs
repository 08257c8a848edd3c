//! Editor State
//!
//! Synchronous state machine behind every record form. The controller feeds
//! it network results; the view renders from snapshots of it.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::draft::{Draft, FieldIssue};
use crate::components::ModalPhase;
use crate::error::ApiError;
use crate::models::{ReferenceKind, SelectOption};
use crate::schema::{EntitySchema, FieldSpec};

/// A child list that must be reloaded because its parent changed
#[derive(Debug, Clone, PartialEq)]
pub struct DependentRefresh {
    pub field: &'static str,
    pub parent_field: &'static str,
    pub kind: ReferenceKind,
    /// `None` when the parent was cleared; nothing to fetch then
    pub parent: Option<String>,
}

/// Create or update call built from the draft
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub record_id: Option<String>,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditRejected {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{0}` is read-only for an existing record")]
    Locked(&'static str),
    #[error("a save is in progress")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitBlocked {
    #[error("a save is already in flight")]
    InFlight,
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldIssue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Failed,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    schema: &'static EntitySchema,
    record_id: Option<String>,
    draft: Draft,
    options: HashMap<ReferenceKind, Vec<SelectOption>>,
    modal: Option<ModalPhase>,
    error: Option<String>,
    issues: Vec<FieldIssue>,
    loading_record: bool,
    submitting: bool,
    navigated: bool,
}

impl EditorState {
    pub fn new(schema: &'static EntitySchema, record_id: Option<String>) -> Self {
        Self::with_draft(schema, record_id, Draft::with_defaults(schema))
    }

    pub fn with_draft(schema: &'static EntitySchema, record_id: Option<String>, draft: Draft) -> Self {
        Self {
            schema,
            loading_record: record_id.is_some(),
            record_id,
            draft,
            options: HashMap::new(),
            modal: None,
            error: None,
            issues: Vec::new(),
            submitting: false,
            navigated: false,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.record_id.is_some()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn options(&self, kind: ReferenceKind) -> &[SelectOption] {
        self.options.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn modal(&self) -> Option<&ModalPhase> {
        self.modal.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn is_loading(&self) -> bool {
        self.loading_record
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_field_visible(&self, field: &FieldSpec) -> bool {
        self.draft.satisfies(field.visible_when)
    }

    pub fn is_field_locked(&self, field: &FieldSpec) -> bool {
        field.locked_on_edit && self.is_editing()
    }

    /// Locked, waiting on a parent selection, or frozen by a save
    pub fn is_field_disabled(&self, field: &FieldSpec) -> bool {
        self.submitting
            || self.is_field_locked(field)
            || field.depends_on.is_some_and(|parent| self.draft.is_blank(parent))
    }

    // ========================
    // Loading
    // ========================

    pub fn apply_options(&mut self, kind: ReferenceKind, options: Vec<SelectOption>) {
        self.options.insert(kind, options);
    }

    /// Merge the fetched record, or record why it could not be fetched.
    ///
    /// Returns the dependent lists to load for the parents the record carries.
    pub fn apply_record(&mut self, fetched: Result<Value, ApiError>) -> Vec<DependentRefresh> {
        self.loading_record = false;
        match fetched {
            Ok(Value::Object(record)) => {
                self.draft.merge(self.schema, &record);
                self.schema
                    .fields
                    .iter()
                    .filter_map(|field| {
                        let parent_field = field.depends_on?;
                        let kind = field.reference_kind()?;
                        let parent = self.draft.text(parent_field);
                        (!parent.is_empty()).then_some(DependentRefresh {
                            field: field.name,
                            parent_field,
                            kind,
                            parent: Some(parent),
                        })
                    })
                    .collect()
            }
            Ok(_) | Err(_) => {
                self.error = Some(self.schema.fetch_error_message());
                Vec::new()
            }
        }
    }

    /// Store a dependent list unless its parent moved on while it loaded
    pub fn apply_dependent_options(&mut self, refresh: &DependentRefresh, options: Vec<SelectOption>) -> bool {
        let current = self.draft.text(refresh.parent_field);
        if refresh.parent.as_deref() != Some(current.as_str()) {
            return false;
        }
        self.options.insert(refresh.kind, options);
        true
    }

    // ========================
    // Editing
    // ========================

    pub fn update_field(&mut self, name: &str, value: Value) -> Result<Vec<DependentRefresh>, EditRejected> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| EditRejected::UnknownField(name.to_string()))?;
        if self.submitting {
            return Err(EditRejected::Busy);
        }
        if self.is_field_locked(field) {
            return Err(EditRejected::Locked(field.name));
        }

        self.draft.set(field.name, value);
        self.issues.retain(|issue| issue.field != field.name);

        let schema = self.schema;
        let parent = self.draft.text(field.name);
        let refreshes = schema
            .dependents_of(field.name)
            .filter_map(|child| {
                let kind = child.reference_kind()?;
                self.draft.set(child.name, Value::String(String::new()));
                self.options.remove(&kind);
                Some(DependentRefresh {
                    field: child.name,
                    parent_field: field.name,
                    kind,
                    parent: (!parent.is_empty()).then(|| parent.clone()),
                })
            })
            .collect();
        Ok(refreshes)
    }

    // ========================
    // Submission
    // ========================

    /// Open the busy modal and build the request, unless blocked
    pub fn begin_submit(&mut self) -> Result<SaveRequest, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let issues = self.draft.validate(self.schema);
        if !issues.is_empty() {
            self.issues = issues.clone();
            return Err(SubmitBlocked::Invalid(issues));
        }

        self.issues.clear();
        self.error = None;
        self.modal = Some(ModalPhase::Busy);
        self.submitting = true;
        self.navigated = false;

        Ok(SaveRequest {
            record_id: self.record_id.clone(),
            payload: Value::Object(self.draft.payload(self.schema)),
        })
    }

    pub fn complete_submit(&mut self, result: Result<Value, ApiError>) -> SubmitOutcome {
        match result {
            Ok(_) => {
                let message = self.schema.success_message(self.is_editing());
                self.modal = Some(ModalPhase::done(message));
                SubmitOutcome::Saved
            }
            Err(err) => {
                self.modal = None;
                self.submitting = false;
                self.error = Some(err.user_message(&self.schema.save_error_fallback()));
                SubmitOutcome::Failed
            }
        }
    }

    /// Hide the success modal; yields the list route the first time only
    pub fn finish_success(&mut self) -> Option<&'static str> {
        if self.navigated || !matches!(self.modal, Some(ModalPhase::Done { .. })) {
            return None;
        }
        self.modal = None;
        self.navigated = true;
        Some(self.schema.list_route)
    }

    /// User asked to close the modal; ignored while busy
    pub fn dismiss_modal(&mut self) -> Option<&'static str> {
        match &self.modal {
            Some(phase) if phase.is_dismissible() => self.finish_success(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntityKind;
    use chrono::NaiveDate;
    use serde_json::json;

    fn state(kind: EntityKind, record_id: Option<&str>) -> EditorState {
        let schema = kind.schema();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        EditorState::with_draft(schema, record_id.map(str::to_string), Draft::with_defaults_on(schema, today))
    }

    fn filled_request() -> EditorState {
        let mut state = state(EntityKind::MaintenanceRequest, None);
        state.update_field("property", json!("3")).unwrap();
        state.update_field("unit", json!("31")).unwrap();
        state.update_field("description", json!("Leaking tap")).unwrap();
        state
    }

    #[test]
    fn test_parent_change_clears_child() {
        let mut state = state(EntityKind::MaintenanceContract, None);
        state.apply_options(ReferenceKind::Units, vec![SelectOption::new(1, "A-1")]);
        state.update_field("unit", json!("1")).unwrap();

        let refreshes = state.update_field("property", json!("7")).unwrap();
        assert_eq!(
            refreshes,
            vec![DependentRefresh {
                field: "unit",
                parent_field: "property",
                kind: ReferenceKind::Units,
                parent: Some("7".into()),
            }]
        );
        assert_eq!(state.draft().text("unit"), "");
        assert!(state.options(ReferenceKind::Units).is_empty());
    }

    #[test]
    fn test_child_disabled_until_parent_chosen() {
        let mut state = state(EntityKind::MaintenanceRequest, None);
        let unit = state.schema().field("unit").unwrap();
        assert!(state.is_field_disabled(unit));
        state.update_field("property", json!("3")).unwrap();
        assert!(!state.is_field_disabled(unit));

        let refreshes = state.update_field("property", json!("")).unwrap();
        assert_eq!(refreshes[0].parent, None);
        assert!(state.is_field_disabled(unit));
    }

    #[test]
    fn test_stale_dependent_options_are_dropped() {
        let mut state = state(EntityKind::MaintenanceRequest, None);
        let first = state.update_field("property", json!("1")).unwrap().remove(0);
        let second = state.update_field("property", json!("2")).unwrap().remove(0);

        assert!(!state.apply_dependent_options(&first, vec![SelectOption::new(10, "P1-U")]));
        assert!(state.apply_dependent_options(&second, vec![SelectOption::new(20, "P2-U")]));
        assert_eq!(state.options(ReferenceKind::Units), &[SelectOption::new(20, "P2-U")]);
    }

    #[test]
    fn test_locked_fields_in_edit_mode() {
        let mut state = state(EntityKind::LeaseRenewal, Some("5"));
        assert_eq!(
            state.update_field("original_monthly_rent", json!("9000")),
            Err(EditRejected::Locked("original_monthly_rent"))
        );
        assert!(state.update_field("new_monthly_rent", json!("9500")).is_ok());
        assert_eq!(
            state.update_field("tenant_name", json!("x")),
            Err(EditRejected::UnknownField("tenant_name".into()))
        );

        let mut creating = self::state(EntityKind::LeaseRenewal, None);
        assert!(creating.update_field("original_monthly_rent", json!("9000")).is_ok());
    }

    #[test]
    fn test_apply_record_requests_child_list() {
        let mut state = state(EntityKind::MaintenanceContract, Some("9"));
        assert!(state.is_loading());

        let refreshes = state.apply_record(Ok(json!({"id": 9, "property": 4, "unit": 40, "total_amount": "1200.00"})));
        assert!(!state.is_loading());
        assert_eq!(state.draft().text("unit"), "40");
        assert_eq!(refreshes.len(), 1);
        assert_eq!(refreshes[0].parent.as_deref(), Some("4"));
    }

    #[test]
    fn test_apply_record_failure_keeps_defaults() {
        let mut state = state(EntityKind::LeaseTermination, Some("2"));
        let refreshes = state.apply_record(Err(ApiError::Rejected { status: 404, body: json!({"detail": "Not found."}) }));
        assert!(refreshes.is_empty());
        assert_eq!(state.error(), Some("Error fetching termination details"));
        assert_eq!(state.draft().text("termination_type"), "normal");
    }

    #[test]
    fn test_missing_required_blocks_submit() {
        let mut state = state(EntityKind::MaintenanceRequest, None);
        match state.begin_submit() {
            Err(SubmitBlocked::Invalid(issues)) => {
                let fields: Vec<_> = issues.iter().map(|issue| issue.field).collect();
                assert_eq!(fields, vec!["property", "unit", "description"]);
            }
            other => panic!("expected invalid, got {other:?}"),
        }
        assert!(state.modal().is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.issues().len(), 3);
    }

    #[test]
    fn test_submit_lifecycle_success() {
        let mut state = filled_request();
        let request = state.begin_submit().unwrap();
        assert_eq!(request.record_id, None);
        assert_eq!(state.modal(), Some(&ModalPhase::Busy));
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));

        // Busy modal cannot be dismissed
        assert_eq!(state.dismiss_modal(), None);
        assert_eq!(state.modal(), Some(&ModalPhase::Busy));

        assert_eq!(state.complete_submit(Ok(json!({"id": 1}))), SubmitOutcome::Saved);
        assert_eq!(state.modal(), Some(&ModalPhase::done("Maintenance request created successfully!")));
        assert!(state.is_submitting());

        assert_eq!(state.finish_success(), Some("/maintenance/requests"));
        assert_eq!(state.modal(), None);
        assert_eq!(state.finish_success(), None);
        assert_eq!(state.dismiss_modal(), None);
    }

    #[test]
    fn test_manual_dismiss_then_timer_navigates_once() {
        let mut state = filled_request();
        state.begin_submit().unwrap();
        state.complete_submit(Ok(Value::Null));
        assert_eq!(state.dismiss_modal(), Some("/maintenance/requests"));
        assert_eq!(state.finish_success(), None);
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut state = filled_request();
        state.begin_submit().unwrap();
        let outcome = state.complete_submit(Err(ApiError::Rejected {
            status: 400,
            body: json!({"detail": "Invalid date range"}),
        }));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(state.modal(), None);
        assert_eq!(state.error(), Some("Invalid date range"));
        assert!(!state.is_submitting());
        assert_eq!(state.draft().text("description"), "Leaking tap");

        // next attempt clears the error
        state.begin_submit().unwrap();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_edits_refused_while_saving() {
        let mut state = filled_request();
        state.begin_submit().unwrap();
        assert_eq!(state.update_field("priority", json!("high")), Err(EditRejected::Busy));
    }
}
