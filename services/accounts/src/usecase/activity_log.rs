use uuid::Uuid;

use crate::domain::repository::{ActivityLogRepository, UserRepository};
use crate::domain::types::{ActivityLog, ActivityType};
use crate::error::AccountsServiceError;

// ── CreateActivityLog ────────────────────────────────────────────────────────

pub struct CreateActivityLogUseCase<A: ActivityLogRepository, U: UserRepository> {
    pub activity: A,
    pub users: U,
}

impl<A: ActivityLogRepository, U: UserRepository> CreateActivityLogUseCase<A, U> {
    /// The entry must reference an existing user and a known activity type;
    /// the type is parsed at the API edge, an unknown user surfaces here.
    pub async fn execute(
        &self,
        user_id: Uuid,
        activity_type: ActivityType,
    ) -> Result<ActivityLog, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::ActivityLogMissingData);
        }
        self.activity.create(user_id, activity_type).await
    }
}

// ── Queries / deletion ───────────────────────────────────────────────────────

pub struct GetActivityLogUseCase<A: ActivityLogRepository> {
    pub activity: A,
}

impl<A: ActivityLogRepository> GetActivityLogUseCase<A> {
    pub async fn execute(&self, log_id: Uuid) -> Result<ActivityLog, AccountsServiceError> {
        self.activity
            .find_by_id(log_id)
            .await?
            .ok_or(AccountsServiceError::ActivityLogNotFound)
    }
}

pub struct DeleteActivityLogUseCase<A: ActivityLogRepository> {
    pub activity: A,
}

impl<A: ActivityLogRepository> DeleteActivityLogUseCase<A> {
    pub async fn execute(&self, log_id: Uuid) -> Result<(), AccountsServiceError> {
        if !self.activity.delete_by_id(log_id).await? {
            return Err(AccountsServiceError::ActivityLogNotFound);
        }
        Ok(())
    }
}

pub struct ListActivityLogsUseCase<A: ActivityLogRepository, U: UserRepository> {
    pub activity: A,
    pub users: U,
}

impl<A: ActivityLogRepository, U: UserRepository> ListActivityLogsUseCase<A, U> {
    /// An empty history is a valid answer, not an error.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<ActivityLog>, AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::UserNotFound);
        }
        self.activity.list_for_user(user_id).await
    }
}
