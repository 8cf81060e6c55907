use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use shared::{
    domain::Roster,
    error::{ApiException, ErrorCode},
    protocol::{signup_route_template, ErrorDetail, MessageResponse, SignupQuery, ACTIVITIES_ROUTE},
};
use tracing::{error, info, warn};

mod api;
mod config;
mod page;

use api::ApiContext;
use config::{load_seed_roster, load_settings};

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorDetail>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let roster = load_seed_roster(&settings)?;
    info!(activities = roster.len(), "roster seeded");

    let state = AppState {
        api: ApiContext::new(roster),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http_index))
        .route("/healthz", get(healthz))
        .route(ACTIVITIES_ROUTE, get(http_list_activities))
        .route(
            signup_route_template(),
            post(http_signup).delete(http_unregister),
        )
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Json<ErrorDetail>)> {
    let roster = api::list_activities(&state.api).await;
    page::render_index(&roster).map(Html).map_err(|error| {
        error!(%error, "page render failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetail {
                detail: "Failed to render page".to_string(),
            }),
        )
    })
}

async fn http_list_activities(State(state): State<Arc<AppState>>) -> Json<Roster> {
    Json(api::list_activities(&state.api).await)
}

async fn http_signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let email = signup_email(query)?;
    match api::signup(&state.api, &activity_name, &email).await {
        Ok(response) => {
            info!(activity = %activity_name, %email, "participant signed up");
            Ok(Json(response))
        }
        Err(error) => {
            warn!(activity = %activity_name, %email, %error, "signup rejected");
            Err(reject(error))
        }
    }
}

async fn http_unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let email = signup_email(query)?;
    match api::unregister(&state.api, &activity_name, &email).await {
        Ok(response) => {
            info!(activity = %activity_name, %email, "participant removed");
            Ok(Json(response))
        }
        Err(error) => {
            warn!(activity = %activity_name, %email, %error, "unregister rejected");
            Err(reject(error))
        }
    }
}

fn signup_email(
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<String, (StatusCode, Json<ErrorDetail>)> {
    query.map(|Query(q)| q.email).map_err(|_| {
        reject(ApiException::validation("email query parameter is required"))
    })
}

fn reject(error: ApiException) -> (StatusCode, Json<ErrorDetail>) {
    let status = match error.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
    };
    (status, Json(error.into()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
