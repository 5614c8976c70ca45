//! Domain core for the clinic page-content CMS.
//!
//! Pure types and logic shared by the database and API layers: the error
//! taxonomy, section type catalog with per-type content validation,
//! language/page resolution, and the section renderer that turns stored
//! content into a DOM patch plan.

pub mod error;
pub mod locale;
pub mod render;
pub mod section;
pub mod types;
