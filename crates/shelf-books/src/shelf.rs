use super::*;
use shelf_auth::Access;
use shelf_auth::Identity;
use shelf_auth::authorize;
use shelf_core::ID;
use shelf_core::ServiceError;
use shelf_core::Unique;

/// Book operations over a [`BookRepository`].
pub struct Shelf<'a, R> {
    repo: &'a R,
}

impl<'a, R> Shelf<'a, R>
where
    R: BookRepository,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub async fn add(&self, identity: &Identity, draft: BookDraft) -> Result<Book, ServiceError> {
        draft.validate()?;
        let book = self
            .repo
            .create(identity.user(), &draft)
            .await?
            .ok_or(ServiceError::NotFound)?;
        log::info!("member {} added book {}", identity.user(), book.id());
        Ok(book)
    }

    pub async fn mine(&self, identity: &Identity) -> Result<Vec<Book>, ServiceError> {
        Ok(self.repo.owned(identity.user()).await?)
    }

    pub async fn all(&self) -> Result<Vec<Book>, ServiceError> {
        Ok(self.repo.all().await?)
    }

    pub async fn update(
        &self,
        identity: &Identity,
        id: ID<Book>,
        patch: BookPatch,
    ) -> Result<Book, ServiceError> {
        patch.validate()?;
        self.guard(identity, id).await?;
        self.repo
            .update(id, identity.user(), &patch)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn delete(&self, identity: &Identity, id: ID<Book>) -> Result<(), ServiceError> {
        self.guard(identity, id).await?;
        match self.repo.delete(id, identity.user()).await? {
            true => {
                log::info!("member {} deleted book {}", identity.user(), id);
                Ok(())
            }
            false => Err(ServiceError::NotFound),
        }
    }

    /// Runs the ownership gate against the stored owner. A denial is
    /// reported exactly like a missing book.
    async fn guard(&self, identity: &Identity, id: ID<Book>) -> Result<(), ServiceError> {
        let owner = self.repo.owner(id).await?.ok_or(ServiceError::NotFound)?;
        match authorize(identity.user(), owner) {
            Access::Allow => Ok(()),
            Access::Deny => {
                log::debug!("member {} denied on book {}", identity.user(), id);
                Err(ServiceError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_auth::Crypto;
    use shelf_auth::Member;
    use shelf_pg::StoreError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for the books table joined to member names.
    struct Memory {
        names: RefCell<HashMap<i64, String>>,
        rows: RefCell<Vec<(Book, bool)>>,
    }

    impl Memory {
        fn with_members(names: &[(i64, &str)]) -> Self {
            Self {
                names: RefCell::new(names.iter().map(|(id, n)| (*id, n.to_string())).collect()),
                rows: RefCell::new(Vec::new()),
            }
        }
        fn deactivate(&self, member: i64) {
            self.names.borrow_mut().remove(&member);
        }
        fn active(&self, owner: ID<Member>) -> bool {
            self.names.borrow().contains_key(&owner.inner())
        }
        fn live(&self) -> Vec<Book> {
            self.rows
                .borrow()
                .iter()
                .filter(|(b, deleted)| !deleted && self.active(b.owner()))
                .map(|(b, _)| b.clone())
                .collect()
        }
        fn mutable(&self, book: &Book, deleted: bool, id: ID<Book>, owner: ID<Member>) -> bool {
            !deleted && book.id() == id && book.owner() == owner && self.active(owner)
        }
    }

    impl BookRepository for Memory {
        async fn create(&self, owner: ID<Member>, draft: &BookDraft) -> Result<Option<Book>, StoreError> {
            let Some(name) = self.names.borrow().get(&owner.inner()).cloned() else {
                return Ok(None);
            };
            let mut rows = self.rows.borrow_mut();
            let book = Book::new(
                ID::from(rows.len() as i64 + 1),
                draft.title.clone(),
                draft.year,
                draft.author.clone(),
                owner,
                name,
            );
            rows.push((book.clone(), false));
            Ok(Some(book))
        }
        async fn all(&self) -> Result<Vec<Book>, StoreError> {
            Ok(self.live())
        }
        async fn owned(&self, owner: ID<Member>) -> Result<Vec<Book>, StoreError> {
            Ok(self.live().into_iter().filter(|b| b.owner() == owner).collect())
        }
        async fn owner(&self, id: ID<Book>) -> Result<Option<ID<Member>>, StoreError> {
            Ok(self.live().iter().find(|b| b.id() == id).map(Book::owner))
        }
        async fn update(
            &self,
            id: ID<Book>,
            owner: ID<Member>,
            patch: &BookPatch,
        ) -> Result<Option<Book>, StoreError> {
            Ok(self
                .rows
                .borrow_mut()
                .iter_mut()
                .find(|(b, deleted)| self.mutable(b, *deleted, id, owner))
                .map(|(b, _)| {
                    *b = Book::new(
                        b.id(),
                        patch.title.clone().unwrap_or_else(|| b.title().to_string()),
                        patch.year.unwrap_or(b.year()),
                        patch.author.clone().unwrap_or_else(|| b.author().to_string()),
                        b.owner(),
                        b.owner_name().to_string(),
                    );
                    b.clone()
                }))
        }
        async fn delete(&self, id: ID<Book>, owner: ID<Member>) -> Result<bool, StoreError> {
            Ok(self
                .rows
                .borrow_mut()
                .iter_mut()
                .find(|(b, deleted)| self.mutable(b, *deleted, id, owner))
                .map(|(_, deleted)| *deleted = true)
                .is_some())
        }
    }

    fn identity(user: i64) -> Identity {
        let crypto = Crypto::new(b"shelf-test");
        crypto.validate(&crypto.issue(ID::from(user)).unwrap()).unwrap()
    }

    fn naruto() -> BookDraft {
        BookDraft {
            title: "Naruto".into(),
            year: 2009,
            author: "masashi".into(),
        }
    }

    #[tokio::test]
    async fn add_assigns_id_and_owner() {
        let repo = Memory::with_members(&[(1, "fajar1411")]);
        let book = Shelf::new(&repo).add(&identity(1), naruto()).await.unwrap();
        assert_eq!(book.id(), ID::from(1));
        assert_eq!(book.owner(), ID::from(1));
        assert_eq!(book.owner_name(), "fajar1411");
    }
    #[tokio::test]
    async fn add_rejects_missing_title() {
        let repo = Memory::with_members(&[(1, "fajar1411")]);
        let draft = BookDraft {
            title: String::new(),
            ..naruto()
        };
        let result = Shelf::new(&repo).add(&identity(1), draft).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repo.live().is_empty());
    }
    #[tokio::test]
    async fn add_for_inactive_owner_is_not_found() {
        let repo = Memory::with_members(&[]);
        let result = Shelf::new(&repo).add(&identity(9), naruto()).await;
        assert_eq!(result, Err(ServiceError::NotFound));
    }
    #[tokio::test]
    async fn listings_scope_by_owner_only_for_mine() {
        let repo = Memory::with_members(&[(1, "ayu"), (2, "budi")]);
        let shelf = Shelf::new(&repo);
        shelf.add(&identity(1), naruto()).await.unwrap();
        shelf.add(&identity(2), naruto()).await.unwrap();
        shelf.add(&identity(2), naruto()).await.unwrap();
        assert_eq!(shelf.all().await.unwrap().len(), 3);
        assert_eq!(shelf.mine(&identity(1)).await.unwrap().len(), 1);
        let budi = shelf.mine(&identity(2)).await.unwrap();
        assert_eq!(budi.len(), 2);
        assert!(budi.iter().all(|b| b.owner_name() == "budi"));
    }
    #[tokio::test]
    async fn stranger_cannot_delete() {
        let repo = Memory::with_members(&[(1, "ayu"), (2, "budi")]);
        let shelf = Shelf::new(&repo);
        let book = shelf.add(&identity(1), naruto()).await.unwrap();
        assert_eq!(
            shelf.delete(&identity(2), book.id()).await,
            Err(ServiceError::NotFound)
        );
        assert_eq!(shelf.all().await.unwrap().len(), 1);
        assert_eq!(shelf.delete(&identity(1), book.id()).await, Ok(()));
        assert!(shelf.all().await.unwrap().is_empty());
    }
    #[tokio::test]
    async fn stranger_cannot_update() {
        let repo = Memory::with_members(&[(1, "ayu"), (2, "budi")]);
        let shelf = Shelf::new(&repo);
        let book = shelf.add(&identity(1), naruto()).await.unwrap();
        let patch = BookPatch {
            title: Some("Boruto".into()),
            ..BookPatch::default()
        };
        assert_eq!(
            shelf.update(&identity(2), book.id(), patch.clone()).await,
            Err(ServiceError::NotFound)
        );
        assert_eq!(shelf.all().await.unwrap()[0].title(), "Naruto");
        let updated = shelf.update(&identity(1), book.id(), patch).await.unwrap();
        assert_eq!(updated.title(), "Boruto");
        assert_eq!(updated.year(), 2009);
        assert_eq!(updated.owner(), ID::from(1));
    }
    #[tokio::test]
    async fn missing_book_is_not_found() {
        let repo = Memory::with_members(&[(1, "ayu")]);
        let shelf = Shelf::new(&repo);
        let patch = BookPatch {
            year: Some(1999),
            ..BookPatch::default()
        };
        assert_eq!(
            shelf.update(&identity(1), ID::from(42), patch).await,
            Err(ServiceError::NotFound)
        );
        assert_eq!(
            shelf.delete(&identity(1), ID::from(42)).await,
            Err(ServiceError::NotFound)
        );
    }
    #[tokio::test]
    async fn deleted_book_cannot_be_deleted_twice() {
        let repo = Memory::with_members(&[(1, "ayu")]);
        let shelf = Shelf::new(&repo);
        let book = shelf.add(&identity(1), naruto()).await.unwrap();
        shelf.delete(&identity(1), book.id()).await.unwrap();
        assert_eq!(
            shelf.delete(&identity(1), book.id()).await,
            Err(ServiceError::NotFound)
        );
    }
    #[tokio::test]
    async fn deactivated_owner_cannot_touch_hidden_books() {
        let repo = Memory::with_members(&[(1, "ayu"), (2, "budi")]);
        let shelf = Shelf::new(&repo);
        let book = shelf.add(&identity(1), naruto()).await.unwrap();
        shelf.add(&identity(2), naruto()).await.unwrap();
        repo.deactivate(1);
        let ayu = identity(1);
        assert_eq!(shelf.all().await.unwrap().len(), 1);
        assert!(shelf.mine(&ayu).await.unwrap().is_empty());
        let patch = BookPatch {
            year: Some(2010),
            ..BookPatch::default()
        };
        assert_eq!(shelf.update(&ayu, book.id(), patch).await, Err(ServiceError::NotFound));
        assert_eq!(shelf.delete(&ayu, book.id()).await, Err(ServiceError::NotFound));
        assert_eq!(shelf.add(&ayu, naruto()).await, Err(ServiceError::NotFound));
        assert_eq!(repo.rows.borrow()[0].0.year(), 2009);
        assert!(!repo.rows.borrow()[0].1);
    }
}
