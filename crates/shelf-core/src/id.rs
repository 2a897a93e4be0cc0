use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Persisted entity with a storage-assigned id.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// Storage-assigned numeric identifier, typed by the entity it names.
///
/// Non-positive values never name a stored row and double as the
/// "unauthenticated" sentinel wherever an identity is expected.
pub struct ID<T> {
    inner: i64,
    entity: PhantomData<fn() -> T>,
}

impl<T> ID<T> {
    pub const fn inner(&self) -> i64 {
        self.inner
    }
    pub const fn valid(&self) -> bool {
        self.inner > 0
    }
}

impl<T> From<i64> for ID<T> {
    fn from(inner: i64) -> Self {
        let entity = PhantomData;
        Self { inner, entity }
    }
}
impl<T> From<ID<T>> for i64 {
    fn from(id: ID<T>) -> Self {
        id.inner
    }
}

// manual impls: derives would demand the same bounds of T
#[rustfmt::skip]
mod traits {
    use super::*;
    impl<T> Copy for ID<T> {}
    impl<T> Clone for ID<T> { fn clone(&self) -> Self { *self } }
    impl<T> Eq for ID<T> {}
    impl<T> PartialEq for ID<T> { fn eq(&self, rhs: &Self) -> bool { self.inner == rhs.inner } }
    impl<T> Ord for ID<T> { fn cmp(&self, rhs: &Self) -> Ordering { self.inner.cmp(&rhs.inner) } }
    impl<T> PartialOrd for ID<T> { fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> { Some(self.cmp(rhs)) } }
    impl<T> std::hash::Hash for ID<T> { fn hash<H: std::hash::Hasher>(&self, h: &mut H) { self.inner.hash(h) } }
    impl<T> fmt::Debug for ID<T> { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.inner) } }
    impl<T> fmt::Display for ID<T> { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.inner) } }
}
