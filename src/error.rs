//! Errors surfaced by the crate. Lookups and removals never fail, they report
//! absence with `Option` or `bool`; only writing a drawing out can go wrong.

use std::io;

use thiserror::Error;

/// The error type for [`Tree::render`][crate::Tree::render].
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink rejected a write.
    #[error("failed to write tree drawing: {0}")]
    Write(#[from] io::Error),
}
