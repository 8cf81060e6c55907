use serde::{Deserialize, Serialize};

pub const ACTIVITIES_ROUTE: &str = "/activities";

/// Body of a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub fn signup_route_template() -> &'static str {
    "/activities/:activity_name/signup"
}

pub fn signed_up_message(email: &str, activity_name: &str) -> String {
    format!("Signed up {email} for {activity_name}")
}

pub fn removed_message(email: &str, activity_name: &str) -> String {
    format!("Removed {email} from {activity_name}")
}
