//! Application layer: locating metadata files and rewriting their declarations.

pub mod locate;
pub mod rewrite;
pub mod update;
