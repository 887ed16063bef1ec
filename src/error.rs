use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Callables have no meaningful equality or textual form
    #[error("cannot take func type as {position} argument: {type_name}")]
    FuncArgument {
        position: &'static str,
        type_name: String,
    },

    #[error("invalid entry '{0}' (expected LABEL=MESSAGE)")]
    InvalidEntry(String),

    #[error("{0}")]
    MissingInput(&'static str),
}
