//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated admin user from a
//!   JWT Bearer token or the `token` cookie.

pub mod auth;
