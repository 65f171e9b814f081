// src/application/ports/mod.rs
pub mod image_store;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type ImageStorePort = dyn image_store::ImageStore;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
