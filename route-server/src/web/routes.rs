//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::directions::DirectionsGateway;
use crate::domain::{DomainError, RouteRequest};
use crate::engine::{EngineError, InvalidSortCriterion, SortCriterion, sort_options};

use super::dto::*;
use super::state::AppState;

/// Longest request-body excerpt written to the log.
const MAX_LOGGED_BODY: usize = 500;

/// Create the application router.
pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: DirectionsGateway + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", post(compare_routes::<G>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compare transport options between two addresses.
async fn compare_routes<G>(
    State(state): State<AppState<G>>,
    Query(query): Query<CompareRoutesQuery>,
    body: Bytes,
) -> Result<Json<CompareRoutesResponse>, AppError>
where
    G: DirectionsGateway + 'static,
{
    let sort = match query.sort.as_deref() {
        Some(s) => s.parse::<SortCriterion>()?,
        None => SortCriterion::default(),
    };

    // Parse JSON manually so we can log the body on failure
    let req: CompareRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %body_excerpt(&body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = RouteRequest::new(req.origin, req.destination)?;

    // Run on its own task so a client disconnect does not cancel gateway
    // calls that are already in flight.
    let engine = Arc::clone(&state.engine);
    let (request, response) = tokio::spawn(async move {
        let result = engine.calculate_routes(&request).await;
        (request, result)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("route calculation task failed: {e}"),
    })?;
    let response = response?;
    info!(
        origin = %request.origin.address,
        destination = %request.destination.address,
        options = response.routes.len(),
        distance_km = response.distance,
        "routes calculated"
    );

    let mut sorted = response.clone();
    sorted.routes = sort_options(&response.routes, sort);

    let currency = state.engine.config().currency_symbol.as_str();
    Ok(Json(CompareRoutesResponse::from_response(
        &sorted, sort, currency,
    )))
}

/// First `MAX_LOGGED_BODY` characters of a request body.
fn body_excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(MAX_LOGGED_BODY)
        .collect()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSortCriterion> for AppError {
    fn from(e: InvalidSortCriterion) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidRequest(inner) => inner.into(),
            EngineError::NoRoutesFound => AppError::NotFound {
                message: EngineError::NoRoutesFound.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::{Fixture, MockDirectionsClient};
    use crate::engine::{EngineConfig, RouteEngine};

    const FIXTURE: &str = r#"{
        "origin": "A",
        "destination": "B",
        "modes": {
            "DRIVING": {"status": "OK", "routes": [{"legs": [{
                "distance": {"text": "10 km", "value": 10000},
                "duration": {"text": "20 mins", "value": 1200}
            }]}]},
            "TRANSIT": {"status": "OK", "routes": [{"legs": [{
                "distance": {"text": "12 km", "value": 12000},
                "duration": {"text": "25 mins", "value": 1500}
            }]}]}
        }
    }"#;

    fn state() -> AppState<MockDirectionsClient> {
        let fixture: Fixture = serde_json::from_str(FIXTURE).unwrap();
        let gateway = MockDirectionsClient::from_fixtures([fixture]);
        AppState::new(RouteEngine::new(gateway, EngineConfig::default()))
    }

    fn query(sort: Option<&str>) -> Query<CompareRoutesQuery> {
        Query(CompareRoutesQuery {
            sort: sort.map(str::to_string),
        })
    }

    fn body(origin: &str, destination: &str) -> Bytes {
        Bytes::from(format!(
            r#"{{"origin":{{"address":"{origin}"}},"destination":{{"address":"{destination}"}}}}"#
        ))
    }

    #[tokio::test]
    async fn compare_sorted_by_cost() {
        let Json(resp) = compare_routes(State(state()), query(Some("cost")), body("A", "B"))
            .await
            .unwrap();

        assert_eq!(resp.sort, SortCriterion::Cost);
        assert_eq!(resp.distance, 10.0);
        let names: Vec<_> = resp.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Public Transit",
                "Personal Car",
                "Auto Rickshaw",
                "Rideshare (Uber/Ola)",
            ]
        );
        assert_eq!(resp.routes[0].cost_text, "₹18-30");
    }

    #[tokio::test]
    async fn default_sort_is_time() {
        let Json(resp) = compare_routes(State(state()), query(None), body(" a ", "b"))
            .await
            .unwrap();

        assert_eq!(resp.sort, SortCriterion::Time);
        let durations: Vec<_> = resp.routes.iter().map(|r| r.duration).collect();
        assert_eq!(durations, vec![20, 22, 24, 25]);
    }

    #[tokio::test]
    async fn unknown_pair_is_not_found() {
        let err = compare_routes(State(state()), query(None), body("A", "Z"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        match err {
            AppError::NotFound { message } => {
                assert_eq!(message, "No routes found between the specified locations")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_address_is_bad_request() {
        let err = compare_routes(State(state()), query(None), body("  ", "B"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bad_sort_and_bad_json_are_bad_requests() {
        let err = compare_routes(State(state()), query(Some("speed")), body("A", "B"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = compare_routes(State(state()), query(None), Bytes::from_static(b"{"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    /// Gateway that takes 20 ms per lookup and counts finished lookups.
    struct SlowGateway {
        completed: std::sync::atomic::AtomicUsize,
    }

    impl DirectionsGateway for SlowGateway {
        async fn get_directions(
            &self,
            _origin: &str,
            _destination: &str,
            _mode: crate::domain::TravelMode,
        ) -> Result<crate::directions::LegSummary, crate::directions::DirectionsError> {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            self.completed
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(crate::directions::LegSummary {
                distance_meters: 4000,
                duration_seconds: 900,
            })
        }
    }

    #[tokio::test]
    async fn dropped_request_still_finishes_gateway_calls() {
        let gateway = SlowGateway {
            completed: std::sync::atomic::AtomicUsize::new(0),
        };
        let state = AppState::new(RouteEngine::new(gateway, EngineConfig::default()));

        // Abandon the handler while the first lookup is in flight.
        let handler = compare_routes(State(state.clone()), query(None), body("A", "B"));
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(5), handler).await;
        assert!(timed_out.is_err());

        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        let completed = state
            .engine
            .gateway()
            .completed
            .load(std::sync::atomic::Ordering::SeqCst);
        assert_eq!(completed, 3);
    }

    #[test]
    fn logged_body_is_truncated() {
        let long = "x".repeat(2000);
        assert_eq!(body_excerpt(long.as_bytes()).chars().count(), MAX_LOGGED_BODY);
        assert_eq!(body_excerpt(b"{\"origin\""), "{\"origin\"");
    }

    #[test]
    fn internal_error_is_server_error() {
        let err = AppError::Internal {
            message: "route calculation task failed".into(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn engine_error_mapping() {
        let err: AppError = EngineError::NoRoutesFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: AppError =
            EngineError::InvalidRequest(DomainError::InvalidRequest("missing")).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
