use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TablesError {
    #[error("failed reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tables parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("tables serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
