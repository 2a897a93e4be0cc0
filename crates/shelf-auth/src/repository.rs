use super::*;
use shelf_core::ID;
use shelf_pg::StoreError;

/// Storage port for member accounts.
///
/// Every read excludes deactivated rows. `Ok(None)` means no active row
/// matched; `Err(StoreError::Duplicate)` reports an email collision.
#[allow(async_fn_in_trait)]
pub trait MemberRepository {
    async fn create(&self, draft: &MemberDraft, hashword: &str) -> Result<Member, StoreError>;
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, StoreError>;
    async fn find(&self, id: ID<Member>) -> Result<Option<Member>, StoreError>;
    async fn update(
        &self,
        id: ID<Member>,
        patch: &MemberPatch,
        hashword: Option<&str>,
    ) -> Result<Option<Member>, StoreError>;
    async fn deactivate(&self, id: ID<Member>) -> Result<Option<Member>, StoreError>;
    /// Whether `id` names a row that has been deactivated.
    async fn deactivated(&self, id: ID<Member>) -> Result<bool, StoreError>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use shelf_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;

    const COLUMNS: &str = "id, name, email, address, phone";

    fn member(row: &tokio_postgres::Row) -> Member {
        Member::new(
            ID::from(row.get::<_, i64>(0)),
            row.get::<_, String>(1),
            row.get::<_, String>(2),
            row.get::<_, String>(3),
            row.get::<_, String>(4),
        )
    }

    impl MemberRepository for Arc<Client> {
        async fn create(&self, draft: &MemberDraft, hashword: &str) -> Result<Member, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (name, email, address, phone, hashword) VALUES ($1, $2, $3, $4, $5)
                  RETURNING ",
                COLUMNS
            );
            Ok(self
                .query_one(
                    SQL,
                    &[
                        &draft.name,
                        &draft.email,
                        &draft.address,
                        &draft.phone,
                        &hashword,
                    ],
                )
                .await
                .map(|row| member(&row))?)
        }

        async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                ", hashword FROM ",
                USERS,
                " WHERE email = $1 AND deleted_at IS NULL"
            );
            Ok(self
                .query_opt(SQL, &[&email])
                .await?
                .map(|row| (member(&row), row.get::<_, String>(5))))
        }

        async fn find(&self, id: ID<Member>) -> Result<Option<Member>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                " FROM ",
                USERS,
                " WHERE id = $1 AND deleted_at IS NULL"
            );
            Ok(self
                .query_opt(SQL, &[&id.inner()])
                .await?
                .map(|row| member(&row)))
        }

        async fn update(
            &self,
            id: ID<Member>,
            patch: &MemberPatch,
            hashword: Option<&str>,
        ) -> Result<Option<Member>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET name       = COALESCE($2, name),
                      email      = COALESCE($3, email),
                      address    = COALESCE($4, address),
                      phone      = COALESCE($5, phone),
                      hashword   = COALESCE($6, hashword),
                      updated_at = now()
                  WHERE id = $1 AND deleted_at IS NULL
                  RETURNING ",
                COLUMNS
            );
            Ok(self
                .query_opt(
                    SQL,
                    &[
                        &id.inner(),
                        &patch.name.as_deref(),
                        &patch.email.as_deref(),
                        &patch.address.as_deref(),
                        &patch.phone.as_deref(),
                        &hashword,
                    ],
                )
                .await?
                .map(|row| member(&row)))
        }

        async fn deactivate(&self, id: ID<Member>) -> Result<Option<Member>, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET deleted_at = now()
                  WHERE id = $1 AND deleted_at IS NULL
                  RETURNING ",
                COLUMNS
            );
            Ok(self
                .query_opt(SQL, &[&id.inner()])
                .await?
                .map(|row| member(&row)))
        }

        async fn deactivated(&self, id: ID<Member>) -> Result<bool, StoreError> {
            const SQL: &str = const_format::concatcp!(
                "SELECT EXISTS (SELECT 1 FROM ",
                USERS,
                " WHERE id = $1 AND deleted_at IS NOT NULL)"
            );
            Ok(self
                .query_one(SQL, &[&id.inner()])
                .await?
                .get::<_, bool>(0))
        }
    }
}
