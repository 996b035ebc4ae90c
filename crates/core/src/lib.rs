//! Domain logic for the mobile directory: the entry model, the fixed state
//! list, validation, normalization and search filtering.
//!
//! Everything in this crate is pure and synchronous. Persistence lives in
//! `mobdir_db`, HTTP in `mobdir_api`.

pub mod entry;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod states;
pub mod validation;
