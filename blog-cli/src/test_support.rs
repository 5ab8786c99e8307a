use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use blog_client::{ApiClient, ApiConfig, PostService};
use tokio::net::TcpListener;

const LIST_BODY: &str = r#"[{"id":"1","slug":"hello-world","title":"Hello","author":{"id":"a1","username":"alice"},"content":"...","status":"published","published_at":"2024-01-01T00:00:00Z","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}]"#;

const ITEM_BODY: &str = r#"{"id":"1","slug":"hello-world","title":"Hello","author":{"id":"a1","username":"alice"},"content":"Полный текст","excerpt":"Коротко","status":"published","published_at":"2024-01-01T00:00:00Z","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#;

#[derive(Clone, Default)]
struct BackendState {
    failing: bool,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Бэкенд блога в памяти процесса: запоминает URI запросов.
pub(crate) struct MockBackend {
    pub(crate) base_url: String,
    state: BackendState,
}

impl MockBackend {
    pub(crate) async fn spawn() -> Self {
        Self::start(false).await
    }

    /// Отвечает 500 на любой запрос.
    pub(crate) async fn spawn_failing() -> Self {
        Self::start(true).await
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    async fn start(failing: bool) -> Self {
        let state = BackendState {
            failing,
            ..BackendState::default()
        };
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend must have address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock backend must serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

pub(crate) fn post_service(base_url: &str) -> PostService {
    let api = ApiClient::new(ApiConfig::new(base_url)).expect("base url must be valid");
    PostService::new(api)
}

fn json(status: StatusCode, body: &'static str) -> Response {
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

async fn handle(State(state): State<BackendState>, uri: Uri) -> Response {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(uri.to_string());

    if state.failing {
        return json(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#);
    }
    match uri.path() {
        "/posts" => json(StatusCode::OK, LIST_BODY),
        "/posts/hello-world" => json(StatusCode::OK, ITEM_BODY),
        _ => json(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#),
    }
}
