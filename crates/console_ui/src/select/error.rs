use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Misassembled select view trees.
pub enum SelectError {
    /// A select part was composed with no enclosing [`Select`](super::Select).
    #[error("{component} must be used within a Select")]
    Configuration {
        /// Component that failed to find its select.
        component: &'static str,
    },
}
