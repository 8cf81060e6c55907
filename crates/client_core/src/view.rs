//! Render-target abstraction and the view models handed to it.

use shared::domain::Activity;

use crate::feedback::FeedbackMessage;

pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "None yet";

const EMAIL_LOCAL_EXCLUDED: &[char] = &[
    '(', ')', ',', ':', ';', '<', '>', '@', '[', '\\', ']', '"',
];

/// Identity an unregister control is bound to when its card is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterControl {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub email: String,
    pub control: UnregisterControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantEntry>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let participants = activity
            .participants
            .iter()
            .map(|email| ParticipantEntry {
                email: email.clone(),
                control: UnregisterControl {
                    activity: name.to_string(),
                    email: email.clone(),
                },
            })
            .collect();

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn controls(&self) -> impl Iterator<Item = &UnregisterControl> {
        self.participants.iter().map(|p| &p.control)
    }
}

/// Current values of the signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// Both fields are `required` and the email field has `type="email"`;
    /// a form failing either constraint never submits.
    pub fn is_complete(&self) -> bool {
        is_valid_email(self.email.trim()) && !self.activity.is_empty()
    }
}

/// Constraint a browser applies to an `<input type="email">` value:
/// a local part without whitespace, one `@`, then dot-separated labels of
/// letters, digits and inner hyphens.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_graphic() && !EMAIL_LOCAL_EXCLUDED.contains(&c));
    let domain_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    local_ok && domain_ok
}

/// Surface the controller renders into.
///
/// Calls are serialized by the controller, so implementations need no
/// locking of their own.
pub trait ActivitiesView: Send + 'static {
    /// Replaces the whole activities area with one card per activity.
    fn render_roster(&mut self, cards: &[ActivityCard]);
    /// Replaces the activities area with a static notice.
    fn render_load_failure(&mut self, notice: &str);
    /// Replaces every option of the activity selection control.
    fn set_activity_options(&mut self, names: &[String]);
    fn show_message(&mut self, message: &FeedbackMessage);
    fn hide_message(&mut self);
    fn reset_form(&mut self);
}
