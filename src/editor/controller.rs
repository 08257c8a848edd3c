//! Editor Controller
//!
//! Drives an `EditorState` through loading, editing and the save lifecycle:
//! busy modal, request, success modal, delay, navigation to the list view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;
use serde_json::Value;

use super::state::{DependentRefresh, EditorState, SubmitOutcome};
use crate::commands::{self, ResourceClient};
use crate::config::SUCCESS_DELAY;
use crate::models::ReferenceKind;
use crate::routes::Navigator;
use crate::schema::EntitySchema;

type Delay = Rc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()>>;

/// Shared handle to one form's state; clones drive the same form.
///
/// Once detached every late result is dropped, so a torn-down page never
/// updates or navigates.
#[derive(Clone)]
pub struct EditorController {
    state: Rc<RefCell<EditorState>>,
    client: Rc<dyn ResourceClient>,
    navigator: Rc<dyn Navigator>,
    delay: Delay,
    success_delay: Duration,
    on_change: Rc<dyn Fn(&EditorState)>,
    attached: Rc<Cell<bool>>,
}

impl EditorController {
    pub fn new(
        schema: &'static EntitySchema,
        record_id: Option<String>,
        client: Rc<dyn ResourceClient>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self::from_state(EditorState::new(schema, record_id), client, navigator)
    }

    pub fn from_state(state: EditorState, client: Rc<dyn ResourceClient>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            client,
            navigator,
            delay: Rc::new(|duration| gloo_timers::future::sleep(duration).boxed_local()),
            success_delay: SUCCESS_DELAY,
            on_change: Rc::new(|_| {}),
            attached: Rc::new(Cell::new(true)),
        }
    }

    pub fn with_delay(mut self, delay: impl Fn(Duration) -> LocalBoxFuture<'static, ()> + 'static) -> Self {
        self.delay = Rc::new(delay);
        self
    }

    pub fn with_success_delay(mut self, success_delay: Duration) -> Self {
        self.success_delay = success_delay;
        self
    }

    /// Called with the new state after every accepted change
    pub fn on_change(mut self, on_change: impl Fn(&EditorState) + 'static) -> Self {
        self.on_change = Rc::new(on_change);
        self
    }

    pub fn snapshot(&self) -> EditorState {
        self.state.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Stop applying results; call when the page goes away
    pub fn detach(&self) {
        self.attached.set(false);
    }

    fn schema(&self) -> &'static EntitySchema {
        self.state.borrow().schema()
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> Option<R> {
        if !self.attached.get() {
            return None;
        }
        let result = {
            let mut state = self.state.borrow_mut();
            f(&mut state)
        };
        (self.on_change)(&self.state.borrow());
        Some(result)
    }

    // ========================
    // Loading
    // ========================

    /// Fetch reference lists and, in edit mode, the record, all at once
    pub async fn load(&self) {
        let schema = self.schema();
        let record_id = self.state.borrow().record_id().map(str::to_string);

        let lists = join_all(schema.reference_lists().into_iter().map(|kind| self.load_list(kind)));
        let record = async {
            match record_id.as_deref() {
                Some(id) => self.load_record(id).await,
                None => Vec::new(),
            }
        };
        let (_, refreshes) = futures::join!(lists, record);

        for refresh in refreshes {
            self.refresh_dependent(refresh).await;
        }
    }

    async fn load_list(&self, kind: ReferenceKind) {
        match commands::fetch_options(self.client.as_ref(), kind, None).await {
            Ok(options) => {
                self.mutate(|state| state.apply_options(kind, options));
            }
            Err(err) => tracing::warn!(?kind, error = %err, "failed to load reference list"),
        }
    }

    async fn load_record(&self, id: &str) -> Vec<DependentRefresh> {
        let schema = self.schema();
        let fetched = commands::fetch_record(self.client.as_ref(), schema.endpoint, id).await;
        if let Err(err) = &fetched {
            tracing::error!(entity = schema.name, id, error = %err, "failed to fetch record");
        }
        self.mutate(|state| state.apply_record(fetched)).unwrap_or_default()
    }

    async fn refresh_dependent(&self, refresh: DependentRefresh) {
        let Some(parent) = refresh.parent.as_deref() else {
            return;
        };
        match commands::fetch_options(self.client.as_ref(), refresh.kind, Some(parent)).await {
            Ok(options) => {
                if self.mutate(|state| state.apply_dependent_options(&refresh, options)) == Some(false) {
                    tracing::debug!(field = refresh.field, parent, "dropped stale options");
                }
            }
            Err(err) => tracing::warn!(field = refresh.field, parent, error = %err, "failed to load dependent list"),
        }
    }

    // ========================
    // Editing
    // ========================

    /// Apply one field change; returns the child lists that now need loading
    pub fn edit(&self, name: &str, value: Value) -> Vec<DependentRefresh> {
        match self.mutate(|state| state.update_field(name, value)) {
            Some(Ok(refreshes)) => refreshes,
            Some(Err(rejected)) => {
                tracing::debug!(field = name, reason = %rejected, "edit ignored");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    pub async fn refresh_all(&self, refreshes: Vec<DependentRefresh>) {
        for refresh in refreshes {
            self.refresh_dependent(refresh).await;
        }
    }

    // ========================
    // Submission
    // ========================

    /// Validate, save, show success, wait, then go back to the list
    pub async fn submit(&self) {
        let request = match self.mutate(EditorState::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(blocked)) => {
                tracing::debug!(reason = %blocked, "submit blocked");
                return;
            }
            None => return,
        };

        let schema = self.schema();
        let result = commands::save_record(
            self.client.as_ref(),
            schema.endpoint,
            request.record_id.as_deref(),
            &request.payload,
        )
        .await;
        match &result {
            Ok(_) => tracing::info!(entity = schema.name, id = ?request.record_id, "record saved"),
            Err(err) => tracing::error!(entity = schema.name, id = ?request.record_id, error = %err, "failed to save record"),
        }

        if self.mutate(|state| state.complete_submit(result)) != Some(SubmitOutcome::Saved) {
            return;
        }

        (self.delay)(self.success_delay).await;
        if let Some(Some(route)) = self.mutate(EditorState::finish_success) {
            self.navigator.navigate(route);
        }
    }

    /// Close the success modal early and navigate; ignored while busy
    pub fn dismiss_modal(&self) {
        if let Some(Some(route)) = self.mutate(EditorState::dismiss_modal) {
            self.navigator.navigate(route);
        }
    }

    pub fn cancel(&self) {
        let route = self.schema().list_route;
        self.navigator.navigate(route);
    }
}
