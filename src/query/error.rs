use thiserror::Error;

/// Error produced by the query dispatcher when a query cannot be answered.
///
/// The four core projection routines are total over well-formed finite
/// inputs and never produce this error themselves; only the dispatch
/// boundary does.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum QueryError {
    /// The target primitive was rejected by the dispatcher's layer filter.
    #[error("query rejected by the layer filter")]
    Filtered,
}
