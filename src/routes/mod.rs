//! 라우트 설정 모듈
//!
//! 데모 애플리케이션의 엔드포인트를 등록합니다.
//!
//! | 경로 | 인증 | 설명 |
//! |------|------|------|
//! | `GET /health` | - | 헬스체크 |
//! | `GET /login` | - | Disqus 로그인 / 콜백 |
//! | `GET /logout` | - | 세션 삭제 |
//! | `GET /` | 세션 | 내 게시글 목록 |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(service)
//!     .app_data(store)
//!     .app_data(settings)
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use crate::middlewares::SessionAuth;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);

    // Protected routes
    cfg.service(
        web::resource("/")
            .wrap(SessionAuth::required())
            .route(web::get().to(handlers::posts::index)),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login)
        .service(handlers::auth::logout);
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "disqus_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
