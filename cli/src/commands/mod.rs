//! Command handlers for the `podwrap` binary.

pub mod image;
pub mod run;
