//! 데모 애플리케이션 라우트 테스트
//!
//! Disqus 는 wiremock 서버로 대체하고 세션은 메모리 저장소를 사용합니다.

use std::sync::Arc;
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use disqus_auth_service::caching::{MemorySessionStore, SessionStore};
use disqus_auth_service::config::AppSettings;
use disqus_auth_service::domain::models::credentials::Credentials;
use disqus_auth_service::http::ReqwestTransport;
use disqus_auth_service::routes::configure_all_routes;
use disqus_auth_service::services::auth::{DisqusAuthService, DisqusEndpoints};

const REDIRECT_URI: &str = "http://localhost:8888/login?next=/";

struct TestState {
    service: web::Data<DisqusAuthService>,
    store: web::Data<dyn SessionStore>,
    settings: web::Data<AppSettings>,
}

fn state(server_uri: &str) -> TestState {
    let endpoints = DisqusEndpoints {
        authorize_uri: format!("{}/api/oauth/2.0/authorize/?", server_uri),
        token_uri: format!("{}/api/oauth/2.0/access_token/?", server_uri),
        api_base: format!("{}/api/3.0", server_uri),
        scope: "read,write".to_string(),
    };
    let service = DisqusAuthService::new(
        Arc::new(ReqwestTransport::new()),
        Credentials::new("cid", "csecret"),
        endpoints,
    );
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let settings = AppSettings {
        redirect_uri: Some(REDIRECT_URI.to_string()),
        ..AppSettings::default()
    };

    TestState {
        service: web::Data::new(service),
        store: web::Data::from(store),
        settings: web::Data::new(settings),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.service.clone())
                .app_data($state.store.clone())
                .app_data($state.settings.clone())
                .configure(configure_all_routes),
        )
        .await
    };
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn mount_login_mocks(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/oauth/2.0/access_token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok1",
            "expires": 3600
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/users/details.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"id": "1", "username": "bob", "name": "Bob", "profileUrl": "http://x", "email": "b@x.com"}
        })))
        .mount(server)
        .await;
}

#[actix_web::test]
async fn test_health() {
    let state = state("http://127.0.0.1:1");
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_index_without_session_redirects_to_login() {
    let state = state("http://127.0.0.1:1");
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login?next=%2F");
}

#[actix_web::test]
async fn test_login_without_code_redirects_to_authorize() {
    let state = state("http://disqus.test");
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        location(&resp),
        "http://disqus.test/api/oauth/2.0/authorize/?client_id=cid\
         &redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Flogin%3Fnext%3D%2F\
         &response_type=code&scope=read%2Cwrite"
    );
}

#[actix_web::test]
async fn test_login_with_provider_error_is_unauthorized() {
    let state = state("http://127.0.0.1:1");
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/login?error=access_denied")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_with_failed_exchange_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/oauth/2.0/access_token/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .expect(1)
        .mount(&server)
        .await;

    let state = state(&server.uri());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/login?code=bad").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Disqus auth failed."));
}

#[actix_web::test]
async fn test_login_then_list_posts_then_logout() {
    let server = MockServer::start().await;
    mount_login_mocks(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/3.0/users/listPosts.json"))
        .and(query_param("access_token", "tok1"))
        .and(query_param("api_key", "cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "response": [{"id": "p1", "raw_message": "hello"}]
        })))
        .mount(&server)
        .await;

    let state = state(&server.uri());
    let app = init_app!(state);

    // 로그인
    let req = test::TestRequest::get()
        .uri("/login?code=abc123&next=/")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
    let session: Cookie<'static> = resp
        .response()
        .cookies()
        .find(|c| c.name() == "user")
        .map(|c| c.into_owned())
        .unwrap();

    let token = state.store.load_token(session.value()).await.unwrap().unwrap();
    assert_eq!(token.access_token, "tok1");
    assert_eq!(token.expires, Some(3600));

    // 게시글 목록
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("user", session.value().to_string()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user"]["username"], "bob");
    assert_eq!(body["posts"], json!([{"id": "p1", "raw_message": "hello"}]));

    // 로그아웃
    let req = test::TestRequest::get()
        .uri("/logout?next=/bye")
        .cookie(Cookie::new("user", session.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/bye");
    assert!(state.store.load(session.value()).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_index_with_failing_api_redirects_to_login() {
    let server = MockServer::start().await;
    mount_login_mocks(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/3.0/users/listPosts.json"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let state = state(&server.uri());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/login?code=abc123").to_request();
    let resp = test::call_service(&app, req).await;
    let session = resp
        .response()
        .cookies()
        .find(|c| c.name() == "user")
        .map(|c| c.value().to_string())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("user", session))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
}
