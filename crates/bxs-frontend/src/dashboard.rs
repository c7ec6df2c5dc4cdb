use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use bxs_api::BxsClient;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::state::ViewState;
use crate::{health_monitor, order_lookup};

/// Owns the view state and drives the health and order lookup flows.
///
/// Both flows run as tokio tasks and only ever report through the state
/// channel; nothing they do returns an error to the caller.
#[derive(Clone)]
pub struct Dashboard {
    api: BxsClient,
    state: Arc<watch::Sender<ViewState>>,
    started: Arc<AtomicBool>,
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl Dashboard {
    pub fn new(api: BxsClient) -> Self {
        Self::with_state(api, ViewState::default())
    }

    pub fn with_state(api: BxsClient, initial: ViewState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            api,
            state: Arc::new(state),
            started: Arc::new(AtomicBool::new(false)),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawn the startup health fetch. Only the first call does anything;
    /// later calls return `None`.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        Some(tokio::spawn(async move {
            health_monitor::check_health(&api, &state).await;
        }))
    }

    /// Replace the identifier used by the next lookup.
    pub fn set_order_id(&self, order_id: impl Into<String>) {
        let order_id = order_id.into();
        self.state.send_if_modified(|s| {
            if s.order_id == order_id {
                return false;
            }
            s.order_id = order_id;
            true
        });
    }

    /// Look up the current identifier.
    ///
    /// The previous record and lookup error are cleared before this returns.
    /// An attempt still in flight is aborted and its result, should it
    /// arrive anyway, is discarded.
    pub fn fetch_order(&self) -> JoinHandle<()> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let (attempt, order_id) = order_lookup::begin_attempt(&self.state);
        debug!(%order_id, attempt, "starting order lookup");

        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            order_lookup::run_attempt(&api, &state, attempt, order_id).await;
        });

        if let Some(previous) = in_flight.replace(handle.abort_handle()) {
            previous.abort();
        }
        handle
    }

    /// Receiver for the rendering layer; it is notified after every write.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("api", &self.api)
            .field("started", &self.started.load(Ordering::Relaxed))
            .finish()
    }
}
