use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use shelf_core::Reply;
use shelf_core::ServiceError;

pub async fn register<R: MemberRepository + 'static>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    let member = Accounts::new(db.get_ref(), tokens.get_ref())
        .register(MemberDraft::from(req.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(Reply::data("registered", MemberResponse::from(&member))))
}

pub async fn login<R: MemberRepository + 'static>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let (token, member) = Accounts::new(db.get_ref(), tokens.get_ref())
        .login(&req.email, &req.password)
        .await?;
    Ok(HttpResponse::Ok()
        .json(Reply::data("logged in", MemberResponse::from(&member)).with_token(token)))
}

pub async fn profile<R: MemberRepository + 'static>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    auth: Auth,
) -> Result<HttpResponse, ServiceError> {
    let member = Accounts::new(db.get_ref(), tokens.get_ref())
        .profile(auth.identity())
        .await?;
    Ok(HttpResponse::Ok().json(Reply::data("profile", MemberResponse::from(&member))))
}

pub async fn update<R: MemberRepository + 'static>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    auth: Auth,
    req: web::Json<UpdateRequest>,
) -> Result<HttpResponse, ServiceError> {
    let member = Accounts::new(db.get_ref(), tokens.get_ref())
        .update(auth.identity(), MemberPatch::from(req.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(Reply::data("updated", MemberResponse::from(&member))))
}

pub async fn deactivate<R: MemberRepository + 'static>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    auth: Auth,
) -> Result<HttpResponse, ServiceError> {
    let member = Accounts::new(db.get_ref(), tokens.get_ref())
        .deactivate(auth.identity())
        .await?;
    Ok(HttpResponse::Ok().json(Reply::data("deactivated", MemberResponse::from(&member))))
}
