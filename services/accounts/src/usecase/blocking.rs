use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{BlockingRepository, UserRepository};
use crate::domain::types::{Blocking, BlockingDirection};
use crate::error::AccountsServiceError;

// ── CreateBlocking ───────────────────────────────────────────────────────────

pub struct CreateBlockingUseCase<B: BlockingRepository, U: UserRepository> {
    pub blockings: B,
    pub users: U,
}

impl<B: BlockingRepository, U: UserRepository> CreateBlockingUseCase<B, U> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<Blocking, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none()
            || self.users.find_by_id(blocked_user_id).await?.is_none()
        {
            return Err(AccountsServiceError::UserNotFound);
        }
        if self.blockings.exists_pair(user_id, blocked_user_id).await? {
            return Err(AccountsServiceError::BlockingAlreadyExists);
        }
        let blocking = Blocking {
            id: Uuid::now_v7(),
            user_id,
            blocked_user_id,
            created_at: Utc::now(),
        };
        self.blockings.create(&blocking).await?;
        Ok(blocking)
    }
}

// ── DeleteBlocking ───────────────────────────────────────────────────────────

pub struct DeleteBlockingUseCase<B: BlockingRepository> {
    pub blockings: B,
}

impl<B: BlockingRepository> DeleteBlockingUseCase<B> {
    pub async fn by_id(&self, blocking_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.blockings.find_by_id(blocking_id).await?.is_none() {
            return Err(AccountsServiceError::BlockingNotFound);
        }
        self.blockings.delete_by_id(blocking_id).await
    }

    pub async fn by_users(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<(), AccountsServiceError> {
        let blocking = self
            .blockings
            .find_by_pair(user_id, blocked_user_id)
            .await?
            .ok_or(AccountsServiceError::BlockingNotFound)?;
        self.by_id(blocking.id).await
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub struct GetBlockingUseCase<B: BlockingRepository> {
    pub blockings: B,
}

impl<B: BlockingRepository> GetBlockingUseCase<B> {
    pub async fn by_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<Option<Blocking>, AccountsServiceError> {
        self.blockings.find_by_pair(user_id, blocked_user_id).await
    }
}

pub struct ListBlockingsUseCase<B: BlockingRepository, U: UserRepository> {
    pub blockings: B,
    pub users: U,
}

impl<B: BlockingRepository, U: UserRepository> ListBlockingsUseCase<B, U> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        direction: BlockingDirection,
    ) -> Result<Vec<Blocking>, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::UserNotFound);
        }
        match direction {
            BlockingDirection::Initiated => self.blockings.list_initiated_by(user_id).await,
            BlockingDirection::Received => self.blockings.list_received_by(user_id).await,
        }
    }
}
