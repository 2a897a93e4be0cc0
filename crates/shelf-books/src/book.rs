use shelf_auth::Member;
use shelf_core::ID;
use shelf_core::ServiceError;
use shelf_core::Unique;

/// Stored book. The owner id is fixed at creation; `owner_name` comes from
/// joining the owner's account row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    id: ID<Self>,
    title: String,
    year: i32,
    author: String,
    owner: ID<Member>,
    owner_name: String,
}

impl Book {
    pub fn new(
        id: ID<Self>,
        title: String,
        year: i32,
        author: String,
        owner: ID<Member>,
        owner_name: String,
    ) -> Self {
        Self {
            id,
            title,
            year,
            author,
            owner,
            owner_name,
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn owner(&self) -> ID<Member> {
        self.owner
    }
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
}

impl Unique for Book {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Column widths of the books table.
pub const TITLE_MAX: usize = 255;
pub const AUTHOR_MAX: usize = 255;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub year: i32,
    pub author: String,
}

impl BookDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.trim().is_empty() {
            return Err(ServiceError::validation("title is required"));
        }
        if self.author.trim().is_empty() {
            return Err(ServiceError::validation("author is required"));
        }
        ServiceError::bounded("title", &self.title, TITLE_MAX)?;
        ServiceError::bounded("author", &self.author, AUTHOR_MAX)?;
        Ok(())
    }
}

/// Partial book change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
}

impl BookPatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.is_none() && self.year.is_none() && self.author.is_none() {
            return Err(ServiceError::validation("nothing to update"));
        }
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ServiceError::validation("title must not be empty"));
        }
        if self.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
            return Err(ServiceError::validation("author must not be empty"));
        }
        if let Some(title) = &self.title {
            ServiceError::bounded("title", title, TITLE_MAX)?;
        }
        if let Some(author) = &self.author {
            ServiceError::bounded("author", author, AUTHOR_MAX)?;
        }
        Ok(())
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use shelf_pg::*;

    impl shelf_pg::Schema for Book {
        fn name() -> &'static str {
            BOOKS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                BOOKS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    title       VARCHAR(",
                TITLE_MAX,
                ") NOT NULL,
                    year        INTEGER NOT NULL DEFAULT 0,
                    author      VARCHAR(",
                AUTHOR_MAX,
                ") NOT NULL,
                    owner_id    BIGINT NOT NULL REFERENCES ",
                USERS,
                "(id),
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    deleted_at  TIMESTAMPTZ
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_books_owner ON ",
                BOOKS,
                " (owner_id) WHERE deleted_at IS NULL;"
            )
        }
    }
}
