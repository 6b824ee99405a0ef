use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum EntwineError {
    #[error("No JavaScript or TypeScript files found in {path}")]
    #[diagnostic(code(entwine::no_files))]
    NoFiles { path: PathBuf },

    #[error("Repository at {path} has no working directory")]
    #[diagnostic(code(entwine::bare_repo))]
    BareRepo { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(code(entwine::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(entwine::git))]
    Git(#[from] git2::Error),

    #[error(transparent)]
    #[diagnostic(code(entwine::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(entwine::glob))]
    Glob(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, EntwineError>;
