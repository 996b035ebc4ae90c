use axum::Json;
use mobdir_core::states::ALLOWED_STATES;

/// GET /states
///
/// The fixed list of accepted states, in declared order.
pub async fn list_states() -> Json<[&'static str; 5]> {
    Json(ALLOWED_STATES)
}
