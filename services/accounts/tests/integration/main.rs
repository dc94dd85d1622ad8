mod activity_test;
mod contact_test;
mod helpers;
mod registration_test;
