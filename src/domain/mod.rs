pub mod author;
pub mod category;
pub mod comment;
pub mod email;
pub mod errors;
pub mod post;
