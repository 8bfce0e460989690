// Authentication middleware for Actix-web
// Decodes the request token once and leaves an AuthContext in the request extensions

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::Data,
};
use futures::future::LocalBoxFuture;

use foodgram_auth::model::{
    ACCESS_TOKEN, AUTHORIZATION_HEADER, AuthContext, LEGACY_TOKEN_PREFIX, TOKEN_PREFIX,
};
use foodgram_auth::service::token::decode_jwt_token_cached;
use foodgram_common::FoodgramError;

use crate::model::AppState;

// Authentication middleware transformer
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware { service })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
}

fn non_empty(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extract the token from, in priority order:
/// 1. `Authorization: Bearer <token>`
/// 2. `Authorization: Token <token>`
/// 3. the `accessToken` header
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(header_val) = req.headers().get(AUTHORIZATION_HEADER)
        && let Ok(s) = header_val.to_str()
    {
        let trimmed = s.trim();
        if let Some(token) = trimmed
            .strip_prefix(TOKEN_PREFIX)
            .or_else(|| trimmed.strip_prefix(LEGACY_TOKEN_PREFIX))
            && let Some(token) = non_empty(token)
        {
            return Some(token);
        }
    }

    req.headers()
        .get(ACCESS_TOKEN)
        .and_then(|v| v.to_str().ok())
        .and_then(non_empty)
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if Method::OPTIONS != *req.method() {
            let mut auth_context = AuthContext::default();

            if let Some(token) = extract_token(&req) {
                auth_context.token_provided = true;

                if let Some(app_state) = req.app_data::<Data<AppState>>() {
                    let secret_key = app_state.configuration.token_secret_key();

                    match decode_jwt_token_cached(&token, &secret_key) {
                        Ok(token_data) => {
                            auth_context.subject = token_data.claims.sub;
                        }
                        Err(err) => {
                            tracing::debug!(path = req.path(), "Rejected token: {}", err);
                            auth_context.jwt_error = Some(err);
                        }
                    }
                } else {
                    tracing::error!("AppState not found in request app_data");
                }
            }

            req.extensions_mut().insert(auth_context);
        }

        let res = self.service.call(req);

        Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
    }
}

/// Id of the user the request was authenticated as.
pub fn authenticated_user(req: &HttpRequest) -> Result<i32, FoodgramError> {
    req.extensions()
        .get::<AuthContext>()
        .map(AuthContext::user_id)
        .unwrap_or_else(|| {
            Err(FoodgramError::Unauthorized(
                "authentication credentials were not provided".to_string(),
            ))
        })
}
