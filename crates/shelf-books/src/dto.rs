use super::*;
use serde::Deserialize;
use serde::Serialize;
use shelf_core::Unique;

#[derive(Deserialize)]
pub struct AddBookRequest {
    pub title: String,
    #[serde(default)]
    pub year: i32,
    pub author: String,
}

impl From<AddBookRequest> for BookDraft {
    fn from(req: AddBookRequest) -> Self {
        Self {
            title: req.title,
            year: req.year,
            author: req.author,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(req: UpdateBookRequest) -> Self {
        Self {
            title: req.title,
            year: req.year,
            author: req.author,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub author: String,
    pub owner: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().inner(),
            title: book.title().to_string(),
            year: book.year(),
            author: book.author().to_string(),
            owner: book.owner_name().to_string(),
        }
    }
}
