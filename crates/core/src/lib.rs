//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: identifiers, the error taxonomy,
//! request-body validation helpers and the enumerated field values of each
//! resource live here so both `stackboard-db` and `stackboard-api` agree on
//! them.

pub mod error;
pub mod link;
pub mod project;
pub mod team;
pub mod types;
pub mod validation;
