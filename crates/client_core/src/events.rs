//! View events and the loop that dispatches them to the controller.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinSet};
use tracing::{debug, error};

use crate::{
    api::ActivitiesApi,
    controller::ActivitiesController,
    view::{ActivitiesView, SignupForm, UnregisterControl},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Reload,
    SignupSubmitted(SignupForm),
    UnregisterClicked(UnregisterControl),
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            ViewEvent::Reload => "reload",
            ViewEvent::SignupSubmitted(_) => "signup_submitted",
            ViewEvent::UnregisterClicked(_) => "unregister_clicked",
        }
    }
}

/// Loads the roster once, then handles events until the sender side closes.
///
/// Every event runs as its own task, so a slow request never blocks the next
/// event. Responses are applied in arrival order. Returns after the channel
/// closes and all handlers have finished.
pub async fn run_event_loop<A, V>(
    controller: Arc<ActivitiesController<A, V>>,
    mut events: mpsc::Receiver<ViewEvent>,
) where
    A: ActivitiesApi + 'static,
    V: ActivitiesView,
{
    let mut handlers = JoinSet::new();
    let initial = Arc::clone(&controller);
    handlers.spawn(async move { initial.load_roster().await });

    while let Some(event) = events.recv().await {
        debug!(event = event.name(), "dispatching view event");
        let controller = Arc::clone(&controller);
        handlers.spawn(async move { controller.handle_event(event).await });

        while let Some(finished) = handlers.try_join_next() {
            log_join_failure(finished);
        }
    }

    while let Some(finished) = handlers.join_next().await {
        log_join_failure(finished);
    }
}

fn log_join_failure(result: Result<(), tokio::task::JoinError>) {
    if let Err(error) = result {
        error!(%error, "view event handler did not complete");
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
