use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use chat_widget::{
    AnswerService, ChatWidget, DEFAULT_FALLBACK_MESSAGE, HttpAnswerService, MemorySurface, Message,
    SubmitOutcome, WidgetConfig, WidgetError,
};
use serde_json::{Value, json};

/// Serve `app` on an ephemeral port and return the `/api/chat` URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/chat")
}

async fn service_for(handler: Router) -> HttpAnswerService {
    HttpAnswerService::new(spawn_server(handler).await).unwrap()
}

#[tokio::test]
async fn test_posts_question_json() {
    // Echo the received body back as the answer.
    let app = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move { Json(json!({ "answer": body.to_string() })) }),
    );
    let service = service_for(app).await;

    let answer = service.ask("How do deposits work?").await.unwrap();
    let sent: Value = serde_json::from_str(&answer).unwrap();
    assert_eq!(sent, json!({ "question": "How do deposits work?" }));
}

#[tokio::test]
async fn test_answer_returned_verbatim() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "answer": "  Hi there!\nAsk away.  " })) }),
    );
    let service = service_for(app).await;

    assert_eq!(
        service.ask("Hello").await.unwrap(),
        "  Hi there!\nAsk away.  "
    );
}

#[tokio::test]
async fn test_error_body_with_server_error_status() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error processing question: boom" })),
            )
        }),
    );
    let service = service_for(app).await;

    match service.ask("Hello").await {
        Err(WidgetError::Service(detail)) => {
            assert_eq!(detail, "Error processing question: boom");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_with_ok_status() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "error": "No question provided" })) }),
    );
    let service = service_for(app).await;

    let err = service.ask("Hello").await.unwrap_err();
    assert!(err.is_service_reported());
}

#[tokio::test]
async fn test_plain_text_failure_status() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down").into_response() }),
    );
    let service = service_for(app).await;

    match service.ask("Hello").await {
        Err(WidgetError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body() {
    let app = Router::new().route("/api/chat", post(|| async { "<html>oops</html>" }));
    let service = service_for(app).await;

    assert!(matches!(
        service.ask("Hello").await,
        Err(WidgetError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unexpected_json_shape() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "reply": "wrong field" })) }),
    );
    let service = service_for(app).await;

    assert!(matches!(
        service.ask("Hello").await,
        Err(WidgetError::Decode(_))
    ));
}

#[tokio::test]
async fn test_widget_end_to_end() {
    let app = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move {
            if body["question"] == "Hello" {
                Json(json!({ "answer": "Hi there" })).into_response()
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "unexpected question" })),
                )
                    .into_response()
            }
        }),
    );
    let url = spawn_server(app).await;
    let base = url.trim_end_matches("/api/chat").to_string() + "/";
    let service = HttpAnswerService::from_config(&WidgetConfig::default(), &base).unwrap();
    let widget = ChatWidget::new(MemorySurface::new(), service, &WidgetConfig::default());

    widget.open_panel();
    widget.with_surface_mut(|s| s.type_input("Hello"));
    assert_eq!(
        widget.submit_from_input().await,
        SubmitOutcome::Answered("Hi there".into())
    );
    assert_eq!(
        widget.submit_user_message("Something else").await,
        SubmitOutcome::Fallback
    );

    let rendered: Vec<Message> = widget.with_surface(|s| s.messages().cloned().collect());
    assert_eq!(
        rendered,
        vec![
            Message::user("Hello"),
            Message::bot("Hi there"),
            Message::user("Something else"),
            Message::bot(DEFAULT_FALLBACK_MESSAGE),
        ]
    );
    assert_eq!(widget.with_surface(MemorySurface::typing_indicator_count), 0);
}
