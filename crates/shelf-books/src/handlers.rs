use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use shelf_auth::Auth;
use shelf_core::ID;
use shelf_core::Reply;
use shelf_core::ServiceError;

fn listing(books: &[Book]) -> Vec<BookResponse> {
    books.iter().map(BookResponse::from).collect()
}

pub async fn add<R: BookRepository + 'static>(
    db: web::Data<R>,
    auth: Auth,
    req: web::Json<AddBookRequest>,
) -> Result<HttpResponse, ServiceError> {
    let book = Shelf::new(db.get_ref())
        .add(auth.identity(), BookDraft::from(req.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(Reply::data("book added", BookResponse::from(&book))))
}

pub async fn all<R: BookRepository + 'static>(db: web::Data<R>) -> Result<HttpResponse, ServiceError> {
    let books = Shelf::new(db.get_ref()).all().await?;
    Ok(HttpResponse::Ok().json(Reply::data("all books", listing(&books))))
}

pub async fn mine<R: BookRepository + 'static>(
    db: web::Data<R>,
    auth: Auth,
) -> Result<HttpResponse, ServiceError> {
    let books = Shelf::new(db.get_ref()).mine(auth.identity()).await?;
    Ok(HttpResponse::Ok().json(Reply::data("my books", listing(&books))))
}

pub async fn update<R: BookRepository + 'static>(
    db: web::Data<R>,
    auth: Auth,
    path: web::Path<i64>,
    req: web::Json<UpdateBookRequest>,
) -> Result<HttpResponse, ServiceError> {
    let id: ID<Book> = ID::from(path.into_inner());
    let book = Shelf::new(db.get_ref())
        .update(auth.identity(), id, BookPatch::from(req.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(Reply::data("book updated", BookResponse::from(&book))))
}

pub async fn delete<R: BookRepository + 'static>(
    db: web::Data<R>,
    auth: Auth,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let id: ID<Book> = ID::from(path.into_inner());
    Shelf::new(db.get_ref()).delete(auth.identity(), id).await?;
    Ok(HttpResponse::Ok().json(Reply::message("book deleted")))
}
