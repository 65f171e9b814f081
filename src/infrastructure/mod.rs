pub mod database;
pub mod images;
pub mod repositories;
pub mod time;
pub mod util;
