use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web;
use shelf_core::ServiceError;
use std::future::Ready;

/// Extractor for authenticated requests.
/// Validates the bearer JWT; no storage round trip.
pub struct Auth(pub Identity);

impl Auth {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(authenticate(req).map(Auth))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, ServiceError> {
    let crypto = req
        .app_data::<web::Data<Crypto>>()
        .ok_or_else(|| ServiceError::internal("token service not configured"))?;
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ServiceError::Unauthenticated)?;
    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ServiceError::Unauthenticated)?;
    crypto.validate(token)
}
