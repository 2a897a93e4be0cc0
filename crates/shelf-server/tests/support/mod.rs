//! In-memory stand-in for the users and books tables.

use shelf_auth::Member;
use shelf_auth::MemberDraft;
use shelf_auth::MemberPatch;
use shelf_auth::MemberRepository;
use shelf_books::Book;
use shelf_books::BookDraft;
use shelf_books::BookPatch;
use shelf_books::BookRepository;
use shelf_core::ID;
use shelf_core::Unique;
use shelf_pg::StoreError;
use shelf_server::Liveness;
use std::cell::Cell;
use std::cell::RefCell;

struct MemberRow {
    member: Member,
    hashword: String,
    deleted: bool,
}

struct BookRow {
    id: ID<Book>,
    draft: BookDraft,
    owner: ID<Member>,
    deleted: bool,
}

#[derive(Default)]
pub struct Memory {
    members: RefCell<Vec<MemberRow>>,
    books: RefCell<Vec<BookRow>>,
    offline: Cell<bool>,
}

impl Memory {
    pub fn offline() -> Self {
        let memory = Self::default();
        memory.offline.set(true);
        memory
    }
    fn active(&self, id: ID<Member>) -> Option<Member> {
        self.members
            .borrow()
            .iter()
            .find(|r| !r.deleted && r.member.id() == id)
            .map(|r| r.member.clone())
    }
    fn view(&self, row: &BookRow) -> Option<Book> {
        self.active(row.owner).map(|owner| {
            Book::new(
                row.id,
                row.draft.title.clone(),
                row.draft.year,
                row.draft.author.clone(),
                row.owner,
                owner.name().to_string(),
            )
        })
    }
    fn mutable(&self, row: &BookRow, id: ID<Book>, owner: ID<Member>) -> bool {
        !row.deleted && row.id == id && row.owner == owner && self.active(owner).is_some()
    }
    fn listing(&self, filter: impl Fn(&BookRow) -> bool) -> Vec<Book> {
        self.books
            .borrow()
            .iter()
            .filter(|r| !r.deleted && filter(r))
            .filter_map(|r| self.view(r))
            .collect()
    }
}

impl MemberRepository for Memory {
    async fn create(&self, draft: &MemberDraft, hashword: &str) -> Result<Member, StoreError> {
        let mut rows = self.members.borrow_mut();
        if rows.iter().any(|r| r.member.email() == draft.email) {
            return Err(StoreError::Duplicate);
        }
        let member = Member::new(
            ID::from(rows.len() as i64 + 1),
            draft.name.clone(),
            draft.email.clone(),
            draft.address.clone(),
            draft.phone.clone(),
        );
        rows.push(MemberRow {
            member: member.clone(),
            hashword: hashword.to_string(),
            deleted: false,
        });
        Ok(member)
    }
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, StoreError> {
        Ok(self
            .members
            .borrow()
            .iter()
            .find(|r| !r.deleted && r.member.email() == email)
            .map(|r| (r.member.clone(), r.hashword.clone())))
    }
    async fn find(&self, id: ID<Member>) -> Result<Option<Member>, StoreError> {
        Ok(self.active(id))
    }
    async fn update(
        &self,
        id: ID<Member>,
        patch: &MemberPatch,
        hashword: Option<&str>,
    ) -> Result<Option<Member>, StoreError> {
        let mut rows = self.members.borrow_mut();
        if let Some(email) = &patch.email {
            if rows.iter().any(|r| r.member.id() != id && r.member.email() == email) {
                return Err(StoreError::Duplicate);
            }
        }
        Ok(rows
            .iter_mut()
            .find(|r| !r.deleted && r.member.id() == id)
            .map(|r| {
                let m = &r.member;
                r.member = Member::new(
                    m.id(),
                    patch.name.clone().unwrap_or_else(|| m.name().to_string()),
                    patch.email.clone().unwrap_or_else(|| m.email().to_string()),
                    patch.address.clone().unwrap_or_else(|| m.address().to_string()),
                    patch.phone.clone().unwrap_or_else(|| m.phone().to_string()),
                );
                if let Some(h) = hashword {
                    r.hashword = h.to_string();
                }
                r.member.clone()
            }))
    }
    async fn deactivate(&self, id: ID<Member>) -> Result<Option<Member>, StoreError> {
        Ok(self
            .members
            .borrow_mut()
            .iter_mut()
            .find(|r| !r.deleted && r.member.id() == id)
            .map(|r| {
                r.deleted = true;
                r.member.clone()
            }))
    }
    async fn deactivated(&self, id: ID<Member>) -> Result<bool, StoreError> {
        Ok(self
            .members
            .borrow()
            .iter()
            .any(|r| r.deleted && r.member.id() == id))
    }
}

impl BookRepository for Memory {
    async fn create(&self, owner: ID<Member>, draft: &BookDraft) -> Result<Option<Book>, StoreError> {
        if self.active(owner).is_none() {
            return Ok(None);
        }
        let row = BookRow {
            id: ID::from(self.books.borrow().len() as i64 + 1),
            draft: draft.clone(),
            owner,
            deleted: false,
        };
        let book = self.view(&row);
        self.books.borrow_mut().push(row);
        Ok(book)
    }
    async fn all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.listing(|_| true))
    }
    async fn owned(&self, owner: ID<Member>) -> Result<Vec<Book>, StoreError> {
        Ok(self.listing(|r| r.owner == owner))
    }
    async fn owner(&self, id: ID<Book>) -> Result<Option<ID<Member>>, StoreError> {
        Ok(self
            .books
            .borrow()
            .iter()
            .find(|r| !r.deleted && r.id == id && self.active(r.owner).is_some())
            .map(|r| r.owner))
    }
    async fn update(
        &self,
        id: ID<Book>,
        owner: ID<Member>,
        patch: &BookPatch,
    ) -> Result<Option<Book>, StoreError> {
        let mut rows = self.books.borrow_mut();
        let Some(row) = rows.iter_mut().find(|r| self.mutable(r, id, owner)) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            row.draft.title = title.clone();
        }
        if let Some(year) = patch.year {
            row.draft.year = year;
        }
        if let Some(author) = &patch.author {
            row.draft.author = author.clone();
        }
        Ok(self.view(row))
    }
    async fn delete(&self, id: ID<Book>, owner: ID<Member>) -> Result<bool, StoreError> {
        Ok(self
            .books
            .borrow_mut()
            .iter_mut()
            .find(|r| self.mutable(r, id, owner))
            .map(|r| r.deleted = true)
            .is_some())
    }
}

impl Liveness for Memory {
    async fn healthy(&self) -> bool {
        !self.offline.get()
    }
}
