use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware::map_response,
    response::Response,
};
use poker_equity::holdem::{EquityEvaluator, EvaluatorConfig};

use crate::handler::{
    Handler, evaluate::EvaluateHandler, health_check::HealthCheckHandler, index::IndexHandler,
};

macro_rules! router {
    ($state:expr, $($handler:ident),* $(,)?) => {
        Router::new()
            $(
                .route($handler::path(), $handler::router())
            )*
            .with_state($state)
    };
}

#[derive(Clone)]
pub struct ServerState {
    pub evaluator: Arc<EquityEvaluator>,
    /// Directory `index.html` is served from.
    pub static_dir: Arc<PathBuf>,
}

impl ServerState {
    pub fn new(config: EvaluatorConfig, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            evaluator: Arc::new(EquityEvaluator::new(config)),
            static_dir: Arc::new(static_dir.into()),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default(), ".")
    }
}

/// Any origin may call the `/api` routes.
async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

pub fn app(state: ServerState) -> Router {
    let api = router! {
        state.clone(),
        EvaluateHandler,
    }
    .layer(map_response(allow_any_origin));

    let pages = router! {
        state,
        HealthCheckHandler,
        IndexHandler,
    };

    api.merge(pages)
}
