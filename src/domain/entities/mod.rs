pub mod comment;
pub mod id;
pub mod media;
pub mod profile;
pub mod question;
pub mod user;
