//! Plain-text render target for the command line.

use client_core::{ActivitiesView, ActivityCard, FeedbackMessage, MessageKind};

#[derive(Debug, Default)]
pub struct TerminalView {
    last_message: Option<FeedbackMessage>,
    load_failed: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the most recent feedback was an error or the last load failed.
    pub fn reported_failure(&self) -> bool {
        self.load_failed
            || self
                .last_message
                .as_ref()
                .is_some_and(FeedbackMessage::is_error)
    }
}

pub fn format_card(card: &ActivityCard) -> String {
    let mut out = format!(
        "{}\n  {}\n  Schedule: {}\n  Availability: {} spots left\n",
        card.name, card.description, card.schedule, card.spots_left
    );
    if card.participants.is_empty() {
        out.push_str("  Participants: None yet\n");
    } else {
        out.push_str("  Participants:\n");
        for participant in &card.participants {
            out.push_str(&format!("    - {}\n", participant.email));
        }
    }
    out
}

pub fn format_message(message: &FeedbackMessage) -> String {
    match message.kind {
        MessageKind::Success => format!("[ok] {}", message.text),
        MessageKind::Error => format!("[error] {}", message.text),
    }
}

impl ActivitiesView for TerminalView {
    fn render_roster(&mut self, cards: &[ActivityCard]) {
        self.load_failed = false;
        for card in cards {
            println!("{}", format_card(card));
        }
    }

    fn render_load_failure(&mut self, notice: &str) {
        self.load_failed = true;
        eprintln!("{notice}");
    }

    fn set_activity_options(&mut self, _names: &[String]) {}

    fn show_message(&mut self, message: &FeedbackMessage) {
        println!("{}", format_message(message));
        self.last_message = Some(message.clone());
    }

    fn hide_message(&mut self) {}

    fn reset_form(&mut self) {}
}
