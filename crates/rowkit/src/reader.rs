use crate::{Model, Query, Result};

/// Scans result rows into records.
pub trait Reader: Sized {
    /// Fills `model` from the first row.
    fn read_one<M: Model>(self, model: &mut M) -> Result<()>;

    /// Builds one record per row, each starting from `new()`.
    fn read_all<M, F>(self, new: F) -> Result<Vec<M>>
    where
        M: Model,
        F: FnMut() -> M;
}

/// Executes queries.
pub trait Db {
    type Reader<'a>: Reader
    where
        Self: 'a;

    fn query(&self, query: Query) -> Self::Reader<'_>;
}
