use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    api::{ActivitiesApi, MutationOutcome},
    events::ViewEvent,
    feedback::FeedbackMessage,
    view::{ActivitiesView, ActivityCard, SignupForm, LOAD_FAILURE_NOTICE},
};

const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Unable to remove participant";
pub const UNREGISTER_FAILED: &str = "Failed to remove participant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// How long a feedback message stays visible.
    pub message_ttl: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            message_ttl: DEFAULT_MESSAGE_TTL,
        }
    }
}

/// Loads the roster into a view and runs signup/unregister requests
/// against the API, re-fetching the roster after every accepted mutation.
pub struct ActivitiesController<A, V> {
    api: A,
    view: Arc<Mutex<V>>,
    hide_timer: Mutex<Option<JoinHandle<()>>>,
    settings: ControllerSettings,
}

impl<A, V> ActivitiesController<A, V>
where
    A: ActivitiesApi + 'static,
    V: ActivitiesView,
{
    pub fn new(api: A, view: V, settings: ControllerSettings) -> Arc<Self> {
        Arc::new(Self {
            api,
            view: Arc::new(Mutex::new(view)),
            hide_timer: Mutex::new(None),
            settings,
        })
    }

    /// Shared handle to the render target.
    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    pub async fn handle_event(&self, event: ViewEvent) {
        match event {
            ViewEvent::Reload => self.load_roster().await,
            ViewEvent::SignupSubmitted(form) => self.submit_signup(form).await,
            ViewEvent::UnregisterClicked(control) => {
                self.unregister(&control.activity, &control.email).await
            }
        }
    }

    pub async fn load_roster(&self) {
        let roster = match self.api.list_activities().await {
            Ok(roster) => roster,
            Err(error) => {
                error!(%error, "error fetching activities");
                self.view.lock().await.render_load_failure(LOAD_FAILURE_NOTICE);
                return;
            }
        };

        let cards: Vec<ActivityCard> = roster
            .iter()
            .map(|(name, activity)| ActivityCard::new(name, activity))
            .collect();
        let names: Vec<String> = roster.names().map(str::to_owned).collect();

        let mut view = self.view.lock().await;
        view.render_roster(&cards);
        view.set_activity_options(&names);
        debug!(activities = cards.len(), "roster rendered");
    }

    pub async fn submit_signup(&self, form: SignupForm) {
        match self.api.signup(&form.activity, &form.email).await {
            Ok(MutationOutcome::Accepted { message }) => {
                info!(activity = %form.activity, email = %form.email, "signed up");
                self.view.lock().await.reset_form();
                self.show_feedback(FeedbackMessage::success(message)).await;
                self.load_roster().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                warn!(status, activity = %form.activity, ?detail, "signup rejected");
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.show_feedback(FeedbackMessage::error(text)).await;
            }
            Err(error) => {
                error!(%error, "error signing up");
                self.show_feedback(FeedbackMessage::error(SIGNUP_FAILED)).await;
            }
        }
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) {
        match self.api.unregister(activity_name, email).await {
            Ok(MutationOutcome::Accepted { message }) => {
                info!(activity = %activity_name, %email, "participant removed");
                self.show_feedback(FeedbackMessage::success(message)).await;
                self.load_roster().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                warn!(status, activity = %activity_name, ?detail, "unregister rejected");
                let text = detail.unwrap_or_else(|| UNREGISTER_REJECTED_FALLBACK.to_string());
                self.show_feedback(FeedbackMessage::error(text)).await;
            }
            Err(error) => {
                error!(%error, "error removing participant");
                self.show_feedback(FeedbackMessage::error(UNREGISTER_FAILED)).await;
            }
        }
    }

    /// Shows `message` and arms its hide timer. A hide still pending for an
    /// earlier message is aborted first so it cannot hide this one.
    async fn show_feedback(&self, message: FeedbackMessage) {
        let mut timer = self.hide_timer.lock().await;
        if let Some(pending) = timer.take() {
            pending.abort();
        }

        self.view.lock().await.show_message(&message);

        let view = Arc::clone(&self.view);
        let ttl = self.settings.message_ttl;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            view.lock().await.hide_message();
        }));
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
