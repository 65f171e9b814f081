// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Each binary compiles
// this module on its own, so some items are unused in any one of them;
// allow that at the module level to keep test output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
