//! Driver-level failures.
//!
//! Problems in Ruffle source are never errors here; they are diagnostics in
//! a `UnitReport`. Only the environment can fail the driver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontEndError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
