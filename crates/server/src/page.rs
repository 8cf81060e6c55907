//! Server-rendered landing page built from the current roster.

use client_core::{ActivitiesView, ActivityCard, ClientError, HtmlView};
use shared::domain::Roster;

/// Renders the page a freshly loaded client would show for `roster`.
pub fn render_index(roster: &Roster) -> Result<String, ClientError> {
    let cards: Vec<ActivityCard> = roster
        .iter()
        .map(|(name, activity)| ActivityCard::new(name, activity))
        .collect();
    let names: Vec<String> = roster.names().map(str::to_owned).collect();

    let mut view = HtmlView::new();
    view.render_roster(&cards);
    view.set_activity_options(&names);
    view.render_page()
}
