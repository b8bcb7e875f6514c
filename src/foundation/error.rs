use std::path::PathBuf;

pub type CoverResult<T> = Result<T, CoverError>;

/// Every way a cover run can fail. All of them abort the run.
#[derive(thiserror::Error, Debug)]
pub enum CoverError {
    #[error("exactly 4 images are required for a cover, {got} provided")]
    ArgumentCount { got: usize },

    #[error("open '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode image '{}'", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("decode resource '{name}'")]
    Resource {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("encode png")]
    Encode(#[source] image::ImageError),

    #[error("write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("preview error: {0}")]
    Preview(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn preview(msg: impl Into<String>) -> Self {
        Self::Preview(msg.into())
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
