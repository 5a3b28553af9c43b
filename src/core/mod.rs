//! Core modules of the tag store: data model, persistence, token
//! classification, canonical ordering and undo.

pub mod classify;
pub mod error;
pub mod journal;
pub mod output;
pub mod schemas;
pub mod store;
pub mod undo;
