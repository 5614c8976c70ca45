pub mod admin_user_repo;
pub mod section_repo;

pub use admin_user_repo::AdminUserRepo;
pub use section_repo::{PageSectionRepo, ReorderError};
