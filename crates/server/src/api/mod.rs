use std::sync::Arc;

use shared::{
    domain::Roster,
    error::ApiException,
    protocol::{removed_message, signed_up_message, MessageResponse},
};
use tokio::sync::RwLock;

mod seed;

pub use seed::default_roster;

#[derive(Clone)]
pub struct ApiContext {
    roster: Arc<RwLock<Roster>>,
}

impl ApiContext {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }
}

pub async fn list_activities(ctx: &ApiContext) -> Roster {
    ctx.roster.read().await.clone()
}

pub async fn signup(
    ctx: &ApiContext,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ApiException> {
    let email = require_email(email)?;
    let mut roster = ctx.roster.write().await;
    let activity = roster
        .get_mut(activity_name)
        .ok_or_else(|| ApiException::not_found("Activity not found"))?;

    if activity.has_participant(email) {
        return Err(ApiException::validation("Student is already signed up"));
    }
    if activity.is_full() {
        return Err(ApiException::validation("Activity is full"));
    }

    activity.participants.push(email.to_string());
    Ok(MessageResponse::new(signed_up_message(email, activity_name)))
}

pub async fn unregister(
    ctx: &ApiContext,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ApiException> {
    let email = require_email(email)?;
    let mut roster = ctx.roster.write().await;
    let activity = roster
        .get_mut(activity_name)
        .ok_or_else(|| ApiException::not_found("Activity not found"))?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or_else(|| ApiException::not_found("Student not signed up"))?;
    activity.participants.remove(position);

    Ok(MessageResponse::new(removed_message(email, activity_name)))
}

fn require_email(email: &str) -> Result<&str, ApiException> {
    if email.trim().is_empty() {
        return Err(ApiException::validation("email query parameter is required"));
    }
    Ok(email)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
