//! Domain types shared by the locator, the rewriter, and the CLI.

pub mod errors;
pub mod model;
