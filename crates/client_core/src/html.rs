//! In-memory HTML document implementing [`ActivitiesView`].
//!
//! Holds the same state a browser page would (activities list, selection
//! options, form fields, message banner) and renders it with askama
//! templates, which escape every server-provided string.

use askama::Template;

use crate::{
    error::ClientError,
    events::ViewEvent,
    feedback::FeedbackMessage,
    view::{
        ActivitiesView, ActivityCard, SignupForm, UnregisterControl, NO_PARTICIPANTS_PLACEHOLDER,
    },
};

const PAGE_TITLE: &str = "Mergington High School Activities";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivitiesArea {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    Failed(String),
}

#[derive(Template)]
#[template(path = "activities.html")]
struct ActivitiesTemplate<'a> {
    cards: &'a [ActivityCard],
    loading: bool,
    failure: Option<&'a str>,
    placeholder: &'a str,
}

struct OptionEntry<'a> {
    name: &'a str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    activities_html: String,
    email: &'a str,
    options: Vec<OptionEntry<'a>>,
    message_class: &'a str,
    message_text: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    area: ActivitiesArea,
    options: Vec<String>,
    form: SignupForm,
    message: Option<FeedbackMessage>,
    message_hidden: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> &ActivitiesArea {
        &self.area
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.area {
            ActivitiesArea::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn activity_options(&self) -> &[String] {
        &self.options
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// The banner, unless it has been hidden or never shown.
    pub fn visible_message(&self) -> Option<&FeedbackMessage> {
        self.message.as_ref().filter(|_| !self.message_hidden)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Selects a loaded activity. Names not offered by the control are
    /// ignored and `false` is returned.
    pub fn select_activity(&mut self, name: &str) -> bool {
        if !self.options.iter().any(|option| option == name) {
            return false;
        }
        self.form.activity = name.to_string();
        true
    }

    /// Submits the form. Returns `None` while a required field is empty or
    /// the email does not pass the `type="email"` check.
    pub fn submit(&self) -> Option<ViewEvent> {
        self.form
            .is_complete()
            .then(|| ViewEvent::SignupSubmitted(self.form.clone()))
    }

    /// Clicks the unregister control bound to `(activity, email)`, if one is
    /// currently rendered.
    pub fn click_unregister(&self, activity: &str, email: &str) -> Option<ViewEvent> {
        self.cards()
            .iter()
            .flat_map(|card| card.controls())
            .find(|control| control.activity == activity && control.email == email)
            .cloned()
            .map(ViewEvent::UnregisterClicked)
    }

    pub fn controls(&self) -> impl Iterator<Item = &UnregisterControl> {
        self.cards().iter().flat_map(|card| card.controls())
    }

    /// Markup of the activities list container's contents.
    pub fn render_activities(&self) -> Result<String, ClientError> {
        let (cards, failure) = match &self.area {
            ActivitiesArea::Loading => (&[][..], None),
            ActivitiesArea::Cards(cards) => (cards.as_slice(), None),
            ActivitiesArea::Failed(notice) => (&[][..], Some(notice.as_str())),
        };
        let template = ActivitiesTemplate {
            cards,
            loading: self.area == ActivitiesArea::Loading,
            failure,
            placeholder: NO_PARTICIPANTS_PLACEHOLDER,
        };
        Ok(template.render()?)
    }

    pub fn render_page(&self) -> Result<String, ClientError> {
        let (message_class, message_text) = match self.visible_message() {
            Some(message) => (message.kind.css_class(), message.text.as_str()),
            None => ("hidden", ""),
        };
        let options = self
            .options
            .iter()
            .map(|name| OptionEntry {
                name,
                selected: *name == self.form.activity,
            })
            .collect();
        let template = PageTemplate {
            title: PAGE_TITLE,
            activities_html: self.render_activities()?,
            email: &self.form.email,
            options,
            message_class,
            message_text,
        };
        Ok(template.render()?)
    }
}

impl ActivitiesView for HtmlView {
    fn render_roster(&mut self, cards: &[ActivityCard]) {
        self.area = ActivitiesArea::Cards(cards.to_vec());
    }

    fn render_load_failure(&mut self, notice: &str) {
        self.area = ActivitiesArea::Failed(notice.to_string());
    }

    fn set_activity_options(&mut self, names: &[String]) {
        self.options = names.to_vec();
        if !self.options.contains(&self.form.activity) {
            self.form.activity.clear();
        }
    }

    fn show_message(&mut self, message: &FeedbackMessage) {
        self.message = Some(message.clone());
        self.message_hidden = false;
    }

    fn hide_message(&mut self) {
        self.message_hidden = true;
    }

    fn reset_form(&mut self) {
        self.form = SignupForm::default();
    }
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
