pub mod activity_log;
pub mod blocking;
pub mod contact;
pub mod role;
pub mod user;
