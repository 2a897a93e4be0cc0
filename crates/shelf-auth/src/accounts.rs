use super::*;
use shelf_core::ServiceError;
use shelf_core::Unique;

/// Member account operations. Holds no state of its own; build one per
/// request around the shared repository and token keys.
pub struct Accounts<'a, R> {
    repo: &'a R,
    crypto: &'a Crypto,
}

impl<'a, R> Accounts<'a, R>
where
    R: MemberRepository,
{
    pub fn new(repo: &'a R, crypto: &'a Crypto) -> Self {
        Self { repo, crypto }
    }

    pub async fn register(&self, draft: MemberDraft) -> Result<Member, ServiceError> {
        draft.validate()?;
        let hashword = password::hash(&draft.password).map_err(ServiceError::internal)?;
        let member = self.repo.create(&draft, &hashword).await?;
        log::info!("registered member {}", member.id());
        Ok(member)
    }

    /// Returns a fresh token and the account. An unknown email is
    /// `NotFound`; a wrong password is `PasswordMismatch`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, Member), ServiceError> {
        let (member, hashword) = self
            .repo
            .lookup(email)
            .await?
            .ok_or(ServiceError::NotFound)?;
        if !password::verify(password, &hashword) {
            log::debug!("password mismatch for member {}", member.id());
            return Err(ServiceError::PasswordMismatch);
        }
        let token = self.crypto.issue(member.id())?;
        Ok((token, member))
    }

    /// A deactivated account is `NotFound`. A validated identity with no
    /// row at all is a server-side inconsistency.
    pub async fn profile(&self, identity: &Identity) -> Result<Member, ServiceError> {
        if let Some(member) = self.repo.find(identity.user()).await? {
            return Ok(member);
        }
        if self.repo.deactivated(identity.user()).await? {
            return Err(ServiceError::NotFound);
        }
        Err(ServiceError::internal(format!("member {} has no row", identity.user())))
    }

    pub async fn update(&self, identity: &Identity, patch: MemberPatch) -> Result<Member, ServiceError> {
        patch.validate()?;
        let hashword = patch
            .password
            .as_deref()
            .map(password::hash)
            .transpose()
            .map_err(ServiceError::internal)?;
        self.repo
            .update(identity.user(), &patch, hashword.as_deref())
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn deactivate(&self, identity: &Identity) -> Result<Member, ServiceError> {
        let member = self
            .repo
            .deactivate(identity.user())
            .await?
            .ok_or(ServiceError::NotFound)?;
        log::info!("deactivated member {}", member.id());
        Ok(member)
    }
}
