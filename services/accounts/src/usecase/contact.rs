use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{ActivityLogRepository, ContactRepository, UserRepository};
use crate::domain::types::{ActivityType, Contact};
use crate::error::AccountsServiceError;

// ── CreateContact ────────────────────────────────────────────────────────────

pub struct CreateContactUseCase<C: ContactRepository, U: UserRepository, A: ActivityLogRepository>
{
    pub contacts: C,
    pub users: U,
    pub activity: A,
}

impl<C: ContactRepository, U: UserRepository, A: ActivityLogRepository>
    CreateContactUseCase<C, U, A>
{
    /// Both users must exist and the ordered pair must be new. Success
    /// appends a CONTACT_CREATION activity entry for the owning user.
    pub async fn execute(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<Contact, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none()
            || self.users.find_by_id(contact_user_id).await?.is_none()
        {
            return Err(AccountsServiceError::UserNotFound);
        }
        if self.contacts.exists_pair(user_id, contact_user_id).await? {
            return Err(AccountsServiceError::ContactAlreadyExists);
        }
        let contact = Contact {
            id: Uuid::now_v7(),
            user_id,
            contact_user_id,
            created_at: Utc::now(),
        };
        self.contacts.create(&contact).await?;
        self.activity
            .create(user_id, ActivityType::ContactCreation)
            .await?;
        Ok(contact)
    }
}

// ── DeleteContact ────────────────────────────────────────────────────────────

pub struct DeleteContactUseCase<C: ContactRepository, A: ActivityLogRepository> {
    pub contacts: C,
    pub activity: A,
}

impl<C: ContactRepository, A: ActivityLogRepository> DeleteContactUseCase<C, A> {
    pub async fn by_id(&self, contact_id: Uuid) -> Result<(), AccountsServiceError> {
        let contact = self
            .contacts
            .find_by_id(contact_id)
            .await?
            .ok_or(AccountsServiceError::ContactNotFound)?;
        self.contacts.delete_by_id(contact_id).await?;
        self.activity
            .create(contact.user_id, ActivityType::ContactDeletion)
            .await?;
        Ok(())
    }

    /// Resolves the ordered pair to a contact id, then delegates to the
    /// by-id deletion path.
    pub async fn by_users(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<(), AccountsServiceError> {
        let contact = self
            .contacts
            .find_by_pair(user_id, contact_user_id)
            .await?
            .ok_or(AccountsServiceError::ContactNotFound)?;
        self.by_id(contact.id).await
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub struct ContactExistsUseCase<C: ContactRepository> {
    pub contacts: C,
}

impl<C: ContactRepository> ContactExistsUseCase<C> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError> {
        self.contacts.exists_pair(user_id, contact_user_id).await
    }
}

pub struct ListContactsUseCase<C: ContactRepository, U: UserRepository> {
    pub contacts: C,
    pub users: U,
}

impl<C: ContactRepository, U: UserRepository> ListContactsUseCase<C, U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Contact>, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::UserNotFound);
        }
        self.contacts.list_for_user(user_id).await
    }
}
