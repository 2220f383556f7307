//! Route definitions for vital-sign screening.

use axum::routing::post;
use axum::Router;

use crate::handlers::check;
use crate::state::AppState;

/// ```text
/// POST   /check   -> check_vitals
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(check::check_vitals))
}
