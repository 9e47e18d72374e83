use std::path::PathBuf;

pub type ShadergenResult<T> = Result<T, ShadergenError>;

#[derive(thiserror::Error, Debug)]
pub enum ShadergenError {
    /// Bad catalog or pipeline configuration. Always fatal for the whole
    /// run; never downgraded to a per-target skip.
    #[error("configuration error: {0}")]
    Config(String),

    /// An external toolchain invocation exited non-zero (or timed out).
    #[error("compile error: failed to generate '{}' (ran: {})", output.display(), command)]
    Compile { output: PathBuf, command: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShadergenError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn compile(output: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self::Compile {
            output: output.into(),
            command: command.into(),
        }
    }
}
