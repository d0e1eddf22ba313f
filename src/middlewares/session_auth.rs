//! 세션 인증 미들웨어
//!
//! `user` 쿠키의 세션 키로 저장소에서 프로필을 찾아 요청 extension 에 넣습니다.
//! 세션이 없으면 로그인 페이지로 리다이렉트합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::SessionAuthService;

/// 로그인이 필요한 리소스에 적용하는 미들웨어
///
/// ```rust,ignore
/// use actix_web::web;
/// use crate::middlewares::SessionAuth;
///
/// cfg.service(
///     web::resource("/")
///         .wrap(SessionAuth::required())
///         .route(web::get().to(posts::index)),
/// );
/// ```
///
/// 핸들러에서는 `web::ReqData<UserProfile>`로 프로필을 받습니다.
pub struct SessionAuth {
    login_path: String,
}

impl SessionAuth {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    /// 세션이 없으면 `/login`으로 보냅니다.
    pub fn required() -> Self {
        Self::new("/login")
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthService {
            service: Rc::new(service),
            login_path: self.login_path.clone(),
        }))
    }
}
