use std::io;

use thiserror::Error;

/// BeaconError is the type of Error that occured.
#[derive(Error, Debug)]
pub enum BeaconError {
    /// DefaultConfigDirNotFound occurs when the default OS config can't be found.
    #[error("Could not determine default OS configuration directory.")]
    DefaultConfigDirNotFound,

    /// InvalidConfigHome occurs when the configuration home exists and is not a directory.
    #[error("'{0}' already exists and is not a directory.")]
    InvalidConfigHome(String),

    /// PathNotUtf8 occurs when Beacon encounters a file path that is not valid UTF-8
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),

    /// io::Error occurs when any given std::io::Error arises.
    #[error(transparent)]
    IoError(#[from] io::Error),
}
