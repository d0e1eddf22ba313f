//! SessionAuth 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::caching::SessionStore;
use crate::config::SessionConfig;
use crate::domain::models::user_profile::UserProfile;
use crate::utils::query::{QueryArgs, url_concat};

pub struct SessionAuthService<S> {
    pub service: Rc<S>,
    pub login_path: String,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let login_path = self.login_path.clone();

        Box::pin(async move {
            let profile = load_profile(&req).await;

            match profile {
                Some(profile) => {
                    log::debug!("세션 인증 성공: {}", profile.username().unwrap_or("<unknown>"));
                    req.extensions_mut().insert(profile);
                }
                None => {
                    let next = req
                        .uri()
                        .path_and_query()
                        .map(|pq| pq.as_str().to_string())
                        .unwrap_or_else(|| "/".to_string());
                    let location = login_redirect(&login_path, &next);

                    log::debug!("세션 없음, 로그인으로 이동: {}", location);
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, location))
                        .finish();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 로그인 경로에 돌아올 위치를 `next`로 붙입니다.
pub fn login_redirect(login_path: &str, next: &str) -> String {
    url_concat(login_path, &QueryArgs::new().with("next", next).encode())
}

/// 쿠키의 세션 키로 프로필을 찾습니다. 저장소 오류는 세션 없음으로 처리합니다.
async fn load_profile(req: &ServiceRequest) -> Option<UserProfile> {
    let session_key = req.cookie(SessionConfig::COOKIE_NAME)?.value().to_string();

    let Some(store) = req.app_data::<web::Data<dyn SessionStore>>() else {
        log::error!("SessionStore 가 등록되지 않았습니다");
        return None;
    };

    match store.load(&session_key).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("세션 조회 실패: {}", e);
            None
        }
    }
}
