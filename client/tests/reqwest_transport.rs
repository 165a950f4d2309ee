//! Integration tests for the reqwest content API transport.
//!
//! A real Actix server on a loopback socket stands in for the content API so
//! headers, body encodings and response normalisation are observed on the
//! wire.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::http::header::{self, HeaderName};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use content_admin::domain::AccessToken;
use content_admin::domain::ports::{
    ApiRequest, ApiTransport, ClientError, FilePart, HttpMethod, MultipartForm,
};
use content_admin::outbound::http::ReqwestApiTransport;
use reqwest::Url;
use serde_json::{Value, json};

fn header_value(request: &HttpRequest, name: HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn echo(request: HttpRequest, body: web::Bytes) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "method": request.method().as_str(),
        "path": request.path(),
        "authorization": header_value(&request, header::AUTHORIZATION),
        "contentType": header_value(&request, header::CONTENT_TYPE),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn plain_failure() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain")
        .body("upstream exploded")
}

async fn empty_not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

async fn validation_failure() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": { "fieldErrors": { "title": ["Title is required"] } },
        "message": ""
    }))
}

async fn empty_success() -> HttpResponse {
    HttpResponse::Ok().finish()
}

struct FakeApi {
    base_url: String,
    handle: ServerHandle,
}

impl FakeApi {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let server = HttpServer::new(|| {
            App::new()
                .route("/api/echo", web::to(echo))
                .route("/api/plain-failure", web::to(plain_failure))
                .route("/api/missing", web::to(empty_not_found))
                .route("/api/invalid", web::to(validation_failure))
                .route("/api/empty", web::to(empty_success))
        })
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen on loopback")
        .run();
        let handle = server.handle();
        actix_rt::spawn(server);
        Self {
            base_url: format!("http://{addr}/"),
            handle,
        }
    }

    fn transport(&self) -> ReqwestApiTransport {
        ReqwestApiTransport::new(Url::parse(&self.base_url).expect("valid base URL"))
            .expect("build transport")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn api_message(result: Result<Value, ClientError>) -> String {
    match result.expect_err("expected an error result") {
        ClientError::Api { error } => error.display_message(),
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[actix_rt::test]
async fn authenticated_json_request_carries_bearer_and_json_type() {
    let api = FakeApi::start();
    let token = AccessToken::new("secret-token").expect("valid token");
    let request = ApiRequest::new(HttpMethod::Post, "/api/echo")
        .with_json(json!({ "name": "Nature" }))
        .with_token(Some(token));

    let echoed = api.transport().execute(request).await.expect("echo succeeds");

    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/echo");
    assert_eq!(echoed["authorization"], "Bearer secret-token");
    assert_eq!(echoed["contentType"], "application/json");
    assert_eq!(echoed["body"], r#"{"name":"Nature"}"#);
    api.stop().await;
}

#[actix_rt::test]
async fn anonymous_request_has_no_authorization_header() {
    let api = FakeApi::start();

    let echoed = api
        .transport()
        .execute(ApiRequest::get("/api/echo"))
        .await
        .expect("echo succeeds");

    assert_eq!(echoed["authorization"], Value::Null);
    assert_eq!(echoed["contentType"], "application/json");
    api.stop().await;
}

#[actix_rt::test]
async fn multipart_request_keeps_its_own_content_type() {
    let api = FakeApi::start();
    let form = MultipartForm::new().text("isFeatured", "false").file(
        "image",
        FilePart {
            file_name: "dawn.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: b"png-bytes".to_vec(),
        },
    );
    let request = ApiRequest::new(HttpMethod::Put, "/api/echo").with_form(form);

    let echoed = api.transport().execute(request).await.expect("echo succeeds");

    let content_type = echoed["contentType"].as_str().expect("content type header");
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type {content_type}"
    );
    let body = echoed["body"].as_str().expect("echoed body");
    assert!(body.contains(r#"name="isFeatured""#));
    assert!(body.contains(r#"filename="dawn.png""#));
    assert!(body.contains("png-bytes"));
    api.stop().await;
}

#[actix_rt::test]
async fn plain_text_failure_surfaces_raw_text() {
    let api = FakeApi::start();
    let result = api
        .transport()
        .execute(ApiRequest::get("/api/plain-failure"))
        .await;
    assert_eq!(api_message(result), "upstream exploded");
    api.stop().await;
}

#[actix_rt::test]
async fn empty_failure_uses_status_phrase() {
    let api = FakeApi::start();
    let result = api.transport().execute(ApiRequest::get("/api/missing")).await;
    assert_eq!(api_message(result), "Not Found");
    api.stop().await;
}

#[actix_rt::test]
async fn validation_failure_projects_first_field_error() {
    let api = FakeApi::start();
    let result = api.transport().execute(ApiRequest::get("/api/invalid")).await;
    assert_eq!(api_message(result), "Title is required");
    api.stop().await;
}

#[actix_rt::test]
async fn empty_success_body_is_null() {
    let api = FakeApi::start();
    let payload = api
        .transport()
        .execute(ApiRequest::delete("/api/empty"))
        .await
        .expect("empty success");
    assert_eq!(payload, Value::Null);
    api.stop().await;
}

#[actix_rt::test]
async fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        listener.local_addr().expect("listener address")
    };
    let transport = ReqwestApiTransport::new(
        Url::parse(&format!("http://{addr}")).expect("valid base URL"),
    )
    .expect("build transport");

    let error = transport
        .execute(ApiRequest::get("/api/echo"))
        .await
        .expect_err("connection should fail");
    assert!(matches!(error, ClientError::Transport { .. }));
}
