pub mod admin_user;
pub mod section;
