//! favstore_core - pure types, traits and errors for the favorites store.
//!
//! Nothing in this crate performs I/O. The persistent store and the cached
//! service live in the `favstore` crate and implement the traits defined here.

pub mod favorites;
pub mod storage;
