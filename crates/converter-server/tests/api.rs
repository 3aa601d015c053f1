//! HTTP-level tests for the conversion and chat endpoints.
//!
//! The router is driven in-process with `oneshot`; gateways are either a
//! recording mock or the real client pointed at a throwaway local server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use converter_core::ports::{CompletionRequest, GatewayPort};
use converter_server::handlers::{ApiState, MISSING_CONVERT_PARAMS};
use converter_server::{OpenAiCompatGateway, router};
use converter_types::{
    ConverterError,
    config::GatewayConfig,
    error::{CHAT_ERROR_FALLBACK, CHAT_OFFLINE_FALLBACK},
    message::Message,
};

struct MockGateway {
    reply: converter_types::Result<String>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockGateway {
    fn new(reply: converter_types::Result<String>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayPort for MockGateway {
    async fn complete(&self, req: CompletionRequest) -> converter_types::Result<String> {
        self.calls.lock().unwrap().push(req);
        self.reply.clone()
    }
}

fn app_with(gateway: Arc<dyn GatewayPort>) -> Router {
    let state = Arc::new(ApiState::new(gateway, &GatewayConfig::default()));
    router(state, None)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ─── /health ─────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok_with_iso_timestamp() {
    for uri in ["/health", "/api/health"] {
        let app = app_with(MockGateway::new(Ok(String::new())));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }
}

// ─── /convert ────────────────────────────────────────────

#[tokio::test]
async fn convert_missing_fields_is_400() {
    let cases = [
        json!({ "fromLanguage": "python", "toLanguage": "go" }),
        json!({ "code": "x", "toLanguage": "go" }),
        json!({ "code": "x", "fromLanguage": "python" }),
        json!({ "code": "", "fromLanguage": "python", "toLanguage": "go" }),
    ];
    for body in cases {
        let gateway = MockGateway::new(Ok("unused".to_string()));
        let (status, response) = post_json(app_with(gateway.clone()), "/convert", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], MISSING_CONVERT_PARAMS);
        assert!(gateway.calls().is_empty());
    }
}

#[tokio::test]
async fn convert_malformed_json_is_400_envelope() {
    let app = app_with(MockGateway::new(Ok(String::new())));
    let request = Request::builder()
        .method("POST")
        .uri("/convert")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn convert_unknown_language_is_400() {
    let gateway = MockGateway::new(Ok(String::new()));
    let (status, body) = post_json(
        app_with(gateway.clone()),
        "/convert",
        json!({ "code": "x", "fromLanguage": "python", "toLanguage": "cobol" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("cobol"));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn convert_identity_returns_input_without_gateway() {
    let gateway = MockGateway::new(Err(ConverterError::missing_credential("GROQ_API_KEY")));
    let (status, body) = post_json(
        app_with(gateway.clone()),
        "/convert",
        json!({ "code": "print('hi')", "fromLanguage": "python", "toLanguage": "python" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "convertedCode": "print('hi')" }));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn convert_success_trims_gateway_output() {
    let gateway = MockGateway::new(Ok("\nfn main() {\n    println!(\"hi\");\n}\n\n".to_string()));
    let (status, body) = post_json(
        app_with(gateway.clone()),
        "/api/convert",
        json!({ "code": "print('hi')", "fromLanguage": "python", "toLanguage": "rust" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["convertedCode"], "fn main() {\n    println!(\"hi\");\n}");
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn convert_upstream_failure_is_500() {
    let gateway = MockGateway::new(Err(ConverterError::Upstream {
        status: 503,
        message: "Service Unavailable".to_string(),
    }));
    let (status, body) = post_json(
        app_with(gateway),
        "/convert",
        json!({ "code": "x = 1", "fromLanguage": "python", "toLanguage": "go" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Service Unavailable");
}

#[tokio::test]
async fn convert_without_credential_is_500_configuration_error() {
    let gateway = Arc::new(OpenAiCompatGateway::new(GatewayConfig::default()));
    let (status, body) = post_json(
        app_with(gateway),
        "/convert",
        json!({ "code": "x = 1", "fromLanguage": "python", "toLanguage": "go" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("GROQ_API_KEY"));
}

// ─── /chat ───────────────────────────────────────────────

fn chat_body(history: Vec<Value>) -> Value {
    json!({
        "message": "What does this do?",
        "currentCode": "print('hi')",
        "currentLanguage": "python",
        "targetLanguage": "go",
        "chatHistory": history,
    })
}

#[tokio::test]
async fn chat_without_credential_is_500() {
    let gateway = Arc::new(OpenAiCompatGateway::new(GatewayConfig::default()));
    let (status, body) = post_json(app_with(gateway), "/chat", chat_body(vec![])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], CHAT_ERROR_FALLBACK);
}

#[tokio::test]
async fn chat_upstream_failure_hides_provider_message() {
    let gateway = MockGateway::new(Err(ConverterError::Upstream {
        status: 401,
        message: "Invalid API Key gsk_secret".to_string(),
    }));
    let (status, body) = post_json(app_with(gateway.clone()), "/chat", chat_body(vec![])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": CHAT_ERROR_FALLBACK }));
    assert!(!body.to_string().contains("Invalid API Key"));
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn chat_transport_failure_uses_offline_text() {
    let gateway = MockGateway::new(Err(ConverterError::Transport {
        detail: "connection reset by peer".to_string(),
    }));
    let (status, body) = post_json(app_with(gateway), "/chat", chat_body(vec![])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], CHAT_OFFLINE_FALLBACK);
}

#[tokio::test]
async fn chat_forwards_bounded_history() {
    let history: Vec<Value> = (0..10)
        .map(|i| {
            let kind = if i % 2 == 0 { "user" } else { "assistant" };
            json!({ "type": kind, "content": format!("m{}", i), "timestamp": "12:00:00" })
        })
        .collect();
    let gateway = MockGateway::new(Ok("  It prints hi.  ".to_string()));
    let (status, body) = post_json(app_with(gateway.clone()), "/chat", chat_body(history)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "response": "It prints hi." }));

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].messages,
        vec![
            Message::assistant("m7"),
            Message::user("m8"),
            Message::assistant("m9"),
            Message::user("What does this do?"),
        ]
    );
    assert!(calls[0].system_prompt.contains("print('hi')"));
}

#[tokio::test]
async fn chat_excludes_conversion_summaries() {
    let history = vec![
        json!({ "type": "user", "content": "convert please" }),
        json!({
            "type": "conversion", "from": "python", "to": "go",
            "originalCode": "print('hi')", "convertedCode": "fmt.Println(\"hi\")"
        }),
        json!({ "type": "assistant", "content": "done" }),
    ];
    let gateway = MockGateway::new(Ok("ok".to_string()));
    let (status, _) = post_json(app_with(gateway.clone()), "/chat", chat_body(history)).await;

    assert_eq!(status, StatusCode::OK);
    let messages = &gateway.calls()[0].messages;
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| !m.content.contains("fmt.Println")));
}

#[tokio::test]
async fn chat_blank_message_is_400_without_gateway() {
    let mut body = chat_body(vec![]);
    body["message"] = json!("   ");
    let gateway = MockGateway::new(Ok("unused".to_string()));
    let (status, response) = post_json(app_with(gateway.clone()), "/chat", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn chat_missing_languages_is_400() {
    let gateway = MockGateway::new(Ok("unused".to_string()));
    let (status, response) =
        post_json(app_with(gateway), "/chat", json!({ "message": "hi" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
}

// ─── Real gateway client against a local fake provider ───

async fn spawn_provider(provider: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, provider).await.unwrap();
    });
    format!("http://{}", addr)
}

fn gateway_at(api_base: String) -> Arc<OpenAiCompatGateway> {
    Arc::new(OpenAiCompatGateway::new(GatewayConfig {
        api_base,
        api_key: Some("gsk_test".to_string()),
        ..GatewayConfig::default()
    }))
}

#[tokio::test]
async fn provider_503_surfaces_as_500_envelope() {
    let provider = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                axum::Json(json!({ "error": { "message": "Service Unavailable" } })),
            )
        }),
    );
    let base = spawn_provider(provider).await;

    let (status, body) = post_json(
        app_with(gateway_at(base)),
        "/convert",
        json!({ "code": "x = 1", "fromLanguage": "python", "toLanguage": "go" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Service Unavailable" }));
}

#[tokio::test]
async fn provider_success_is_parsed_and_request_is_well_formed() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let seen_in_handler = seen.clone();
    let provider = Router::new().route(
        "/v1/chat/completions",
        post(move |axum::Json(body): axum::Json<Value>| {
            let seen = seen_in_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                axum::Json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": "  x := 1\n" } }]
                }))
            }
        }),
    );
    let base = spawn_provider(provider).await;

    let (status, body) = post_json(
        app_with(gateway_at(base)),
        "/convert",
        json!({ "code": "x = 1", "fromLanguage": "python", "toLanguage": "go" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["convertedCode"], "x := 1");

    let sent = seen.lock().unwrap().clone().unwrap();
    assert_eq!(sent["model"], "llama-3.3-70b-versatile");
    assert_eq!(sent["max_tokens"], 1024);
    assert_eq!(sent["messages"][0]["role"], "system");
    assert_eq!(sent["messages"][1]["role"], "user");
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = post_json(
        app_with(gateway_at(format!("http://{}", addr))),
        "/convert",
        json!({ "code": "x = 1", "fromLanguage": "python", "toLanguage": "go" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Could not reach"));
}
