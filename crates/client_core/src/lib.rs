//! Activities view controller: loads the activity roster into a render
//! target and drives signup and unregister requests against the HTTP API.

pub mod api;
pub mod controller;
pub mod error;
pub mod events;
pub mod feedback;
pub mod html;
pub mod view;

pub use api::{ActivitiesApi, HttpActivitiesApi, MutationOutcome};
pub use controller::{ActivitiesController, ControllerSettings};
pub use error::ClientError;
pub use events::{run_event_loop, ViewEvent};
pub use feedback::{FeedbackMessage, MessageKind};
pub use html::HtmlView;
pub use view::{ActivitiesView, ActivityCard, ParticipantEntry, SignupForm, UnregisterControl};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
