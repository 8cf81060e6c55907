use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use axum::Router;
use shared::{
    domain::{Activity, Roster},
    protocol::{removed_message, signed_up_message},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    api::{ActivitiesApi, MutationOutcome},
    error::ClientError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiCall {
    List,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Scripted reply for the next signup/unregister call.
pub(crate) enum Scripted {
    Outcome(MutationOutcome),
    TransportFailure,
}

#[derive(Default)]
struct FakeState {
    roster: Roster,
    list_fails: bool,
    scripted: VecDeque<Scripted>,
    calls: Vec<ApiCall>,
}

/// In-process API double. Unscripted mutations are applied to its roster
/// the way the real server applies them.
#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub(crate) fn with_roster(roster: Roster) -> Self {
        let api = Self::default();
        api.state.try_lock().expect("fresh fake").roster = roster;
        api
    }

    pub(crate) async fn script(&self, reply: Scripted) {
        self.state.lock().await.scripted.push_back(reply);
    }

    pub(crate) async fn fail_listing(&self, fails: bool) {
        self.state.lock().await.list_fails = fails;
    }

    pub(crate) async fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().await.calls.clone()
    }

    pub(crate) async fn list_calls(&self) -> usize {
        self.calls()
            .await
            .iter()
            .filter(|call| **call == ApiCall::List)
            .count()
    }

    pub(crate) async fn roster(&self) -> Roster {
        self.state.lock().await.roster.clone()
    }
}

fn transport_failure() -> ClientError {
    ClientError::Decode(
        serde_json::from_str::<serde_json::Value>("connection reset").expect_err("not json"),
    )
}

fn rejected(status: u16, detail: &str) -> MutationOutcome {
    MutationOutcome::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

fn take_scripted(state: &mut FakeState) -> Option<Result<MutationOutcome, ClientError>> {
    state.scripted.pop_front().map(|reply| match reply {
        Scripted::Outcome(outcome) => Ok(outcome),
        Scripted::TransportFailure => Err(transport_failure()),
    })
}

#[async_trait]
impl ActivitiesApi for FakeApi {
    async fn list_activities(&self) -> Result<Roster, ClientError> {
        let mut state = self.state.lock().await;
        state.calls.push(ApiCall::List);
        if state.list_fails {
            return Err(ClientError::UnexpectedStatus(503));
        }
        Ok(state.roster.clone())
    }

    async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        let mut state = self.state.lock().await;
        state.calls.push(ApiCall::Signup {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
        if let Some(reply) = take_scripted(&mut state) {
            return reply;
        }
        let Some(activity) = state.roster.get_mut(activity_name) else {
            return Ok(rejected(404, "Activity not found"));
        };
        if activity.has_participant(email) {
            return Ok(rejected(400, "Student is already signed up"));
        }
        activity.participants.push(email.to_string());
        Ok(MutationOutcome::Accepted {
            message: signed_up_message(email, activity_name),
        })
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        let mut state = self.state.lock().await;
        state.calls.push(ApiCall::Unregister {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
        if let Some(reply) = take_scripted(&mut state) {
            return reply;
        }
        let Some(activity) = state.roster.get_mut(activity_name) else {
            return Ok(rejected(404, "Activity not found"));
        };
        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Ok(rejected(404, "Student not signed up"));
        };
        activity.participants.remove(position);
        Ok(MutationOutcome::Accepted {
            message: removed_message(email, activity_name),
        })
    }
}

pub(crate) fn sample_roster() -> Roster {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis skills and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Painting, drawing, and sculpture techniques",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["maya@mergington.edu"]),
        ),
    ]
    .into_iter()
    .collect()
}

pub(crate) async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Address nothing is listening on.
pub(crate) async fn closed_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}
