use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::runtime::Handle;

use crate::desk_app::config::Config;
use crate::desk_app::customers::{
    ControllerState, CustomerForm, HttpCustomerStore, SyncAction, SyncController,
};

type DeskController = SyncController<HttpCustomerStore>;

/// Work that has to leave the UI thread
enum Job {
    Mount,
    Action(SyncAction),
}

/// Central application state shared across egui views.
///
/// The controller is moved into a tokio task while a trigger runs and comes
/// back over a channel; in between the views render the last snapshot with
/// every action disabled.
pub struct DeskState {
    pub config: Config,
    runtime: Handle,
    store: Arc<HttpCustomerStore>,
    controller: Option<DeskController>,
    snapshot: ControllerState,
    pending: Option<Receiver<DeskController>>,
    mounted: bool,
}

impl DeskState {
    pub fn new(config: Config, runtime: Handle) -> Self {
        tracing::info!("Customer desk using server {}", config.server_url());
        let store = Arc::new(HttpCustomerStore::new(config.clone()));

        Self {
            config,
            runtime,
            controller: Some(SyncController::new(store.clone())),
            store,
            snapshot: ControllerState::default(),
            pending: None,
            mounted: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.controller.is_none()
    }

    /// State to render this frame
    pub fn view(&self) -> &ControllerState {
        match &self.controller {
            Some(controller) => controller.state(),
            None => &self.snapshot,
        }
    }

    /// Editable form buffers, unavailable while a trigger is in flight
    pub fn form_mut(&mut self) -> Option<&mut CustomerForm> {
        self.controller.as_mut().map(|c| c.form_mut())
    }

    /// Take the controller back if its task has finished
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(controller) => {
                self.controller = Some(controller);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tracing::error!("Customer task ended without handing back its state");
                self.controller = Some(SyncController::with_state(
                    self.store.clone(),
                    self.snapshot.clone(),
                ));
                self.pending = None;
            }
        }
    }

    /// Load the list once, on the first frame
    pub fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        if let Some(controller) = self.controller.take() {
            self.mounted = true;
            self.spawn(controller, Job::Mount, ctx);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(controller) = self.controller.as_mut() {
            controller.expire_notice(now);
        }
    }

    /// How soon the UI must repaint for the notice to hide on time
    pub fn next_repaint(&self, now: Instant) -> Option<Duration> {
        self.view().notice().map(|n| n.remaining(now))
    }

    pub fn dispatch(&mut self, action: SyncAction, ctx: &egui::Context) {
        let Some(mut controller) = self.controller.take() else {
            tracing::debug!("Ignoring {:?} while a request is in flight", action);
            return;
        };

        match action {
            SyncAction::Edit(customer) => controller.edit(customer),
            SyncAction::CancelEdit => controller.cancel_edit(),
            SyncAction::DismissNotice => controller.dismiss_notice(),
            action => {
                self.spawn(controller, Job::Action(action), ctx);
                return;
            }
        }

        self.controller = Some(controller);
    }

    fn spawn(&mut self, mut controller: DeskController, job: Job, ctx: &egui::Context) {
        self.snapshot = controller.state().clone();

        let (tx, rx) = channel();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match job {
                Job::Mount => controller.mount().await,
                Job::Action(action) => controller.handle(action).await,
            }
            let _ = tx.send(controller);
            ctx.request_repaint();
        });

        self.pending = Some(rx);
    }
}
