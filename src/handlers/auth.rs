//! Authentication HTTP Handlers
//!
//! Disqus OAuth 2.0 로그인과 로그아웃을 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `GET /login` - 코드가 없으면 Disqus 동의 페이지로, 있으면 토큰 교환 후 세션 생성
//! - `GET /logout` - 세션 삭제 후 `next`로 이동
use actix_web::cookie::{time, Cookie};
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::caching::{new_session_key, SessionStore};
use crate::config::{AppSettings, SessionConfig};
use crate::domain::{safe_next, LoginQuery, LogoutQuery};
use crate::errors::errors::AppError;
use crate::services::auth::DisqusAuthService;

#[get("/login")]
pub async fn login(
    req: HttpRequest,
    query: web::Query<LoginQuery>,
    service: web::Data<DisqusAuthService>,
    store: web::Data<dyn SessionStore>,
    settings: web::Data<AppSettings>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("Disqus 인증이 취소되었거나 실패했습니다");
        log::warn!("Disqus OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let redirect_uri = settings
        .redirect_uri
        .clone()
        .unwrap_or_else(|| callback_uri(&req));

    let Some(code) = query.code.as_deref() else {
        let login_url = service.get_login_url(&redirect_uri);
        log::debug!("Disqus 동의 페이지로 이동: {}", login_url);
        return Ok(found(&login_url));
    };

    let profile = service.authenticate_with_code(&redirect_uri, code).await?;

    let session_key = new_session_key();
    store.save(&session_key, &profile, settings.session_ttl).await?;

    let cookie = Cookie::build(SessionConfig::COOKIE_NAME, session_key)
        .path("/")
        .http_only(true)
        .secure(settings.secure_cookies)
        .max_age(time::Duration::seconds(settings.session_ttl.as_secs() as i64))
        .finish();

    let next = safe_next(query.next.as_deref());
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, next))
        .cookie(cookie)
        .finish())
}

#[get("/logout")]
pub async fn logout(
    req: HttpRequest,
    query: web::Query<LogoutQuery>,
    store: web::Data<dyn SessionStore>,
) -> Result<HttpResponse, AppError> {
    if let Some(cookie) = req.cookie(SessionConfig::COOKIE_NAME) {
        store.remove(cookie.value()).await?;
    }

    let mut removal = Cookie::build(SessionConfig::COOKIE_NAME, "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, safe_next(query.next.as_deref())))
        .cookie(removal)
        .finish())
}

/// 요청의 scheme/host 로 만든 콜백 URL
pub fn callback_uri(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}/login?next=/", info.scheme(), info.host())
}

pub(crate) fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
