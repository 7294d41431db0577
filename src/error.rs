use thiserror::Error;

/// Errors raised by the evaluation engine and the typed client operations.
///
/// Client methods return `anyhow::Result`; these variants travel inside it and
/// can be recovered with `err.downcast_ref::<Error>()`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("unknown goal: {0}")]
    UnknownGoal(String),

    #[error("unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("unknown activity kind: {0}")]
    UnknownActivityKind(String),

    #[error("unknown meal moment: {0}")]
    UnknownMoment(String),

    #[error("unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("no food at index {index} in {moment}")]
    NoSuchFood { moment: String, index: usize },

    #[error("invalid food catalog: {0}")]
    InvalidCatalog(String),
}
