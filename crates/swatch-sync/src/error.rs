use std::io;
use std::path::PathBuf;

use swatch_color::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("could not find a :root block in the style sheet")]
    MissingRootBlock,

    /// The config file lacks one of the generated `const ... as const;` blocks.
    #[error("could not find the `{0}` block in the config file")]
    MissingBlock(&'static str),

    #[error(transparent)]
    Color(#[from] ParseError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid color map: {0}")]
    ColorMap(#[from] serde_json::Error),
}
