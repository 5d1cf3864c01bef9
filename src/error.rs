use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("unsupported language code `{code}`")]
    UnsupportedLanguage { code: String },

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
