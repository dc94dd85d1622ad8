//! sea-orm entities for the accounts service database.

pub mod activity_logs;
pub mod block_list;
pub mod contacts;
pub mod roles;
pub mod status;
pub mod user_roles;
pub mod users;
