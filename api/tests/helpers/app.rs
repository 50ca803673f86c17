use api::auth::generate_jwt;
use api::routes::routes;
use axum::{Router, body::Body, http::Request, response::Response};
use db::models::user::Model as UserModel;
use db::test_utils::setup_test_db;
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

/// Router over a fresh in-memory database with migrations applied.
pub async fn make_test_app() -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    let app_state = AppState::new(setup_test_db().await);
    let router = Router::new().nest("/api", routes(app_state.clone()));

    (router.into_service().boxed_clone(), app_state)
}

pub fn token_for(user: &UserModel) -> String {
    let (token, _) = generate_jwt(user.id, user.admin).unwrap();
    token
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
