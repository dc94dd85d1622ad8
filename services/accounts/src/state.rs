use sea_orm::DatabaseConnection;

use crate::infra::auth::HttpTokenValidator;
use crate::infra::db::{
    DbActivityLogRepository, DbBlockingRepository, DbContactRepository, DbRoleRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_validator: HttpTokenValidator,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn contact_repo(&self) -> DbContactRepository {
        DbContactRepository {
            db: self.db.clone(),
        }
    }

    pub fn blocking_repo(&self) -> DbBlockingRepository {
        DbBlockingRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_repo(&self) -> DbActivityLogRepository {
        DbActivityLogRepository {
            db: self.db.clone(),
        }
    }
}
