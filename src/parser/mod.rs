pub mod article;
pub mod format;
pub mod links;
pub mod patterns;
pub mod sanitize;
