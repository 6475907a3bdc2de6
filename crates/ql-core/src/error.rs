/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building core model values from input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The string does not name a known quest category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The string does not name a known hero class.
    #[error("unknown hero class: {0}")]
    UnknownHeroClass(String),

    /// The string does not name a known guardian.
    #[error("unknown guardian: {0}")]
    UnknownGuardian(String),
}
