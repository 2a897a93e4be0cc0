use super::*;
use shelf_auth::Member;
use shelf_core::ID;
use shelf_pg::StoreError;

/// Storage port for books.
///
/// Reads skip deleted books and books whose owner has been deactivated.
/// Mutations are scoped by both book id and owner id, so a non-owner's
/// call matches nothing, and a deactivated owner's books are frozen.
#[allow(async_fn_in_trait)]
pub trait BookRepository {
    /// `Ok(None)` when `owner` has no active account.
    async fn create(&self, owner: ID<Member>, draft: &BookDraft) -> Result<Option<Book>, StoreError>;
    async fn all(&self) -> Result<Vec<Book>, StoreError>;
    async fn owned(&self, owner: ID<Member>) -> Result<Vec<Book>, StoreError>;
    async fn owner(&self, id: ID<Book>) -> Result<Option<ID<Member>>, StoreError>;
    async fn update(
        &self,
        id: ID<Book>,
        owner: ID<Member>,
        patch: &BookPatch,
    ) -> Result<Option<Book>, StoreError>;
    /// Returns whether a row was deleted.
    async fn delete(&self, id: ID<Book>, owner: ID<Member>) -> Result<bool, StoreError>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use shelf_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;

    /// Projection shared by every read: book columns plus the owner's name.
    const LISTING: &str = const_format::concatcp!(
        "SELECT ",
        BOOKS,
        ".id, ",
        BOOKS,
        ".title, ",
        BOOKS,
        ".year, ",
        BOOKS,
        ".author, ",
        BOOKS,
        ".owner_id, ",
        USERS,
        ".name FROM ",
        BOOKS,
        " JOIN ",
        USERS,
        " ON ",
        USERS,
        ".id = ",
        BOOKS,
        ".owner_id WHERE ",
        BOOKS,
        ".deleted_at IS NULL AND ",
        USERS,
        ".deleted_at IS NULL"
    );

    /// Restricts a books statement to rows whose owner is not deactivated.
    const ACTIVE_OWNER: &str = const_format::concatcp!(
        "owner_id IN (SELECT id FROM ",
        USERS,
        " WHERE deleted_at IS NULL)"
    );

    fn book(row: &tokio_postgres::Row) -> Book {
        Book::new(
            ID::from(row.get::<_, i64>(0)),
            row.get::<_, String>(1),
            row.get::<_, i32>(2),
            row.get::<_, String>(3),
            ID::from(row.get::<_, i64>(4)),
            row.get::<_, String>(5),
        )
    }

    impl BookRepository for Arc<Client> {
        async fn create(&self, owner: ID<Member>, draft: &BookDraft) -> Result<Option<Book>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "WITH created AS (
                    INSERT INTO ",
                BOOKS,
                " (title, year, author, owner_id)
                    SELECT $1, $2, $3, id FROM ",
                USERS,
                " WHERE id = $4 AND deleted_at IS NULL
                    RETURNING id, title, year, author, owner_id
                )
                SELECT created.id, created.title, created.year, created.author, created.owner_id, ",
                USERS,
                ".name
                FROM created JOIN ",
                USERS,
                " ON ",
                USERS,
                ".id = created.owner_id"
            );
            Ok(self
                .query_opt(SQL, &[&draft.title, &draft.year, &draft.author, &owner.inner()])
                .await?
                .map(|row| book(&row)))
        }

        async fn all(&self) -> Result<Vec<Book>, StoreError> {
            const SQL: &str = const_format::concatcp!(LISTING, " ORDER BY ", BOOKS, ".id");
            Ok(self
                .query(SQL, &[])
                .await?
                .iter()
                .map(book)
                .collect())
        }

        async fn owned(&self, owner: ID<Member>) -> Result<Vec<Book>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                LISTING,
                " AND ",
                BOOKS,
                ".owner_id = $1 ORDER BY ",
                BOOKS,
                ".id"
            );
            Ok(self
                .query(SQL, &[&owner.inner()])
                .await?
                .iter()
                .map(book)
                .collect())
        }

        async fn owner(&self, id: ID<Book>) -> Result<Option<ID<Member>>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "SELECT owner_id FROM ",
                BOOKS,
                " WHERE id = $1 AND deleted_at IS NULL AND ",
                ACTIVE_OWNER
            );
            Ok(self
                .query_opt(SQL, &[&id.inner()])
                .await?
                .map(|row| ID::from(row.get::<_, i64>(0))))
        }

        async fn update(
            &self,
            id: ID<Book>,
            owner: ID<Member>,
            patch: &BookPatch,
        ) -> Result<Option<Book>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "WITH updated AS (
                    UPDATE ",
                BOOKS,
                " SET title      = COALESCE($3, title),
                          year       = COALESCE($4, year),
                          author     = COALESCE($5, author),
                          updated_at = now()
                    WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL AND ",
                ACTIVE_OWNER,
                "
                    RETURNING id, title, year, author, owner_id
                )
                SELECT updated.id, updated.title, updated.year, updated.author, updated.owner_id, ",
                USERS,
                ".name
                FROM updated JOIN ",
                USERS,
                " ON ",
                USERS,
                ".id = updated.owner_id"
            );
            Ok(self
                .query_opt(
                    SQL,
                    &[
                        &id.inner(),
                        &owner.inner(),
                        &patch.title.as_deref(),
                        &patch.year,
                        &patch.author.as_deref(),
                    ],
                )
                .await?
                .map(|row| book(&row)))
        }

        async fn delete(&self, id: ID<Book>, owner: ID<Member>) -> Result<bool, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "UPDATE ",
                BOOKS,
                " SET deleted_at = now()
                  WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL AND ",
                ACTIVE_OWNER
            );
            Ok(self.execute(SQL, &[&id.inner(), &owner.inner()]).await? > 0)
        }
    }
}
