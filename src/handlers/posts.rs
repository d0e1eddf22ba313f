//! 로그인한 사용자의 Disqus 게시글 목록
use actix_web::{web, HttpResponse};
use serde_json::{json, Value};
use crate::domain::models::user_profile::UserProfile;
use crate::handlers::auth::found;
use crate::services::auth::DisqusAuthService;

/// `GET /` - [`SessionAuth`](crate::middlewares::SessionAuth) 뒤에서만 호출됩니다.
///
/// API 호출이 실패하면 (토큰 만료 등) 다시 로그인하도록 `/login`으로 보냅니다.
pub async fn index(
    profile: web::ReqData<UserProfile>,
    service: web::Data<DisqusAuthService>,
) -> HttpResponse {
    let profile = profile.into_inner();

    match service.list_posts(&profile.access_token).await {
        Ok(posts) => HttpResponse::Ok().json(json!({
            "user": profile,
            "posts": posts.get("response").cloned().unwrap_or(Value::Null),
        })),
        Err(e) => {
            log::warn!("게시글 조회 실패, 재로그인 필요: {}", e);
            found("/login")
        }
    }
}
