use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use poker_equity::holdem::{EquityRequest, Evaluation, Suggestion};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, event};

use crate::{define_handler, error::ServerError, poker_server::ServerState};

fn default_players() -> usize {
    2
}

#[derive(serde::Deserialize, serde::Serialize, PartialEq, Debug)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub my_hand: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default = "default_players")]
    pub players: usize,
}

#[derive(serde::Deserialize, serde::Serialize, PartialEq, Debug, Clone)]
pub struct EvaluationResult {
    /// Rounded to two decimals.
    pub equity: f64,
    pub suggestion: Suggestion,
    pub hand_strength: String,
}

impl From<Evaluation> for EvaluationResult {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            equity: (evaluation.equity * 100.0).round() / 100.0,
            suggestion: evaluation.suggestion,
            hand_strength: evaluation.hand_strength,
        }
    }
}

/// The result is repeated at the top level and under `result` so that
/// older clients reading either place keep working.
#[derive(serde::Deserialize, serde::Serialize, PartialEq, Debug)]
pub struct EvaluateResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub flat: EvaluationResult,
    pub result: EvaluationResult,
}

impl From<EvaluationResult> for EvaluateResponse {
    fn from(result: EvaluationResult) -> Self {
        Self {
            ok: true,
            flat: result.clone(),
            result,
        }
    }
}

async fn run_evaluation(state: ServerState, body: Bytes) -> Result<EvaluateResponse, ServerError> {
    // Parsed whatever the content type says.
    let payload: EvaluateRequest = serde_json::from_slice(&body)?;
    let request = EquityRequest::from_tokens(&payload.my_hand, &payload.board, payload.players)?;

    // The simulation is CPU bound, keep it off the async workers.
    let evaluation = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::from_os_rng();
        state.evaluator.evaluate(&request, &mut rng)
    })
    .await
    .map_err(|err| ServerError::Internal(err.to_string()))??;

    Ok(EvaluationResult::from(evaluation).into())
}

pub async fn evaluate_handler(State(state): State<ServerState>, body: Bytes) -> Response {
    match run_evaluation(state, body).await {
        Ok(response) => Json(response).into_response(),
        Err(err @ ServerError::Internal(_)) => {
            event!(Level::ERROR, error = %err, debug = ?err, "evaluate_failed");
            err.into_response()
        }
        Err(err) => {
            event!(Level::WARN, error = %err, debug = ?err, "evaluate_rejected");
            err.into_response()
        }
    }
}

pub async fn preflight_handler() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type"),
            ),
        ],
    )
        .into_response()
}

define_handler!(
    EvaluateHandler {
        Method = POST;
        Path = "/api/evaluate";
        FN = evaluate_handler;
        Preflight = preflight_handler;
    }
);
