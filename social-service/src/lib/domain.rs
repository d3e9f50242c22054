pub mod authentication;
pub mod post;
pub mod user;
