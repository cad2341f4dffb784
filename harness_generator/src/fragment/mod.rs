//!
//! The source-text fragment generators.
//!

pub mod constructor;
pub mod handler;
pub mod header;
pub mod proxy;
