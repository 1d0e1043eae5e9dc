use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{Level, event};

use crate::{define_handler, poker_server::ServerState};

/// Serve the `index.html` front end from the static directory.
pub async fn index_handler(State(state): State<ServerState>) -> Response {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            event!(Level::WARN, path = %path.display(), error = %err, "index_not_found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

define_handler!(
    IndexHandler {
        Method = GET;
        Path = "/";
        FN = index_handler;
    }
);

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::poker_server::app;

    #[tokio::test]
    async fn missing_index_is_not_found() {
        let state = ServerState::new(Default::default(), "/definitely/not/a/real/dir");
        let response = app(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(StatusCode::NOT_FOUND, response.status());
        assert!(
            response
                .headers()
                .get(axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
