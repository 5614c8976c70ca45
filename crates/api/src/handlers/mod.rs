pub mod auth;
pub mod content;
pub mod pages;
pub mod render;
