//! Synchronization Controller
//!
//! Keeps the desk app's view of the customer collection consistent with the
//! record store. Every mutation is followed by a full re-read; the controller
//! never patches `records` locally.
//!
//! # Triggers
//!
//! - `Refresh` - re-read the collection (also run on mount)
//! - `Edit` - switch the form to update mode for one record
//! - `Submit` - create or update, depending on the form mode
//! - `Delete` - remove one record
//! - `CancelEdit` / `DismissNotice` - local only, no store call

use std::sync::Arc;
use std::time::Instant;

use crate::desk_app::customers::form::CustomerForm;
use crate::desk_app::customers::notice::Notice;
use crate::shared::customer::{Customer, CustomerId};
use crate::shared::error::CustomerError;
use crate::shared::store::RecordStore;

/// Whether the form creates a new record or edits a selected one
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Create,
    Update(Customer),
}

impl FormMode {
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn selected(&self) -> Option<&Customer> {
        match self {
            Self::Update(customer) => Some(customer),
            Self::Create => None,
        }
    }
}

/// Everything the UI renders
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    records: Vec<Customer>,
    mode: FormMode,
    notice: Option<Notice>,
    form: CustomerForm,
    loaded: bool,
    stale: bool,
}

impl ControllerState {
    pub fn records(&self) -> &[Customer] {
        &self.records
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn selected(&self) -> Option<&Customer> {
        self.mode.selected()
    }

    /// The current notice, if it has not been hidden
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible())
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Set when the last read failed and `records` may lag the store
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn shows_empty_state(&self) -> bool {
        self.loaded && self.records.is_empty()
    }

    /// No read has ever succeeded and the last attempt failed
    pub fn shows_load_failure(&self) -> bool {
        !self.loaded && self.stale
    }
}

/// A user intent dispatched to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    Refresh,
    Edit(Customer),
    Submit,
    Delete(CustomerId),
    CancelEdit,
    DismissNotice,
}

pub struct SyncController<S: RecordStore + ?Sized> {
    store: Arc<S>,
    state: ControllerState,
}

impl<S: RecordStore + ?Sized> SyncController<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_state(store, ControllerState::default())
    }

    pub fn with_state(store: Arc<S>, state: ControllerState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Form buffers, edited in place by the UI between triggers
    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.state.form
    }

    pub async fn handle(&mut self, action: SyncAction) {
        match action {
            SyncAction::Refresh => self.refresh().await,
            SyncAction::Edit(customer) => self.edit(customer),
            SyncAction::Submit => self.submit().await,
            SyncAction::Delete(id) => self.delete(&id).await,
            SyncAction::CancelEdit => self.cancel_edit(),
            SyncAction::DismissNotice => self.dismiss_notice(),
        }
    }

    /// Initial load when the view first appears
    pub async fn mount(&mut self) {
        tracing::info!("Loading customers");
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        if let Err(e) = self.reload().await {
            self.state.notice = Some(Notice::error(format!(
                "Error fetching customers: {}",
                e.reason()
            )));
        }
    }

    /// Re-read the collection without raising a notice
    async fn reload(&mut self) -> Result<(), CustomerError> {
        match self.store.list_all().await {
            Ok(records) => {
                tracing::debug!("Fetched {} customers", records.len());
                self.state.records = records;
                self.state.loaded = true;
                self.state.stale = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to fetch customers: {}", e);
                self.state.stale = true;
                Err(e)
            }
        }
    }

    pub fn edit(&mut self, customer: Customer) {
        self.state.form = CustomerForm::from_customer(&customer);
        self.state.mode = FormMode::Update(customer);
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub async fn submit(&mut self) {
        let verb = if self.state.mode.is_update() { "update" } else { "create" };

        let fields = match self.state.form.to_fields() {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!("Form rejected before submit: {}", e);
                self.fail(verb, &e);
                return;
            }
        };

        let result = match &self.state.mode {
            FormMode::Create => self.store.create(fields).await,
            FormMode::Update(selected) => self.store.update_by_id(&selected.id, fields).await,
        };

        match result {
            Ok(customer) => {
                tracing::info!("Customer {} {}d", customer.id, verb);
                self.reset_form();
                self.settle(format!("Customer {}d successfully", verb)).await;
            }
            Err(e) => self.fail(verb, &e),
        }
    }

    pub async fn delete(&mut self, id: &CustomerId) {
        match self.store.delete_by_id(id).await {
            Ok(_) => {
                tracing::info!("Customer {} deleted", id);
                if self.state.selected().is_some_and(|c| &c.id == id) {
                    self.reset_form();
                }
                self.settle("Customer deleted successfully".to_string()).await;
            }
            Err(e) => self.fail("delete", &e),
        }
    }

    pub fn dismiss_notice(&mut self) {
        if let Some(notice) = self.state.notice.as_mut() {
            notice.dismiss();
        }
    }

    /// Hide the notice once it has outlived its display time
    pub fn expire_notice(&mut self, now: Instant) {
        if let Some(notice) = self.state.notice.as_mut() {
            if notice.is_visible() && notice.is_expired(now) {
                notice.dismiss();
            }
        }
    }

    /// Reload after a successful mutation; the mutation stands either way
    async fn settle(&mut self, message: String) {
        if self.reload().await.is_err() {
            tracing::warn!("List is stale after a successful mutation");
        }
        self.state.notice = Some(Notice::success(message));
    }

    fn fail(&mut self, verb: &str, error: &CustomerError) {
        tracing::warn!("Failed to {} customer: {}", verb, error);
        self.state.notice = Some(Notice::error(format!(
            "Failed to {} customer: {}",
            verb,
            error.reason()
        )));
    }

    fn reset_form(&mut self) {
        self.state.form.clear();
        self.state.mode = FormMode::Create;
    }
}
