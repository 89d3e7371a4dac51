use crate::infrastructure::http::controllers::team_members;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/team-members",
            get(team_members::list_team_members),
        )
        .route(
            "/api/team-members",
            post(team_members::create_team_member),
        )
        .route(
            "/api/team-members/:id",
            get(team_members::get_team_member),
        )
        .route(
            "/api/team-members/:id/stress",
            patch(team_members::update_stress_level),
        )
        .route("/api/team-summary", get(team_members::get_team_summary));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Stressboard Team Stress Tracker"
}

async fn health_handler() -> &'static str {
    "OK"
}
