mod discovery;
mod target;

pub use discovery::DiscoveryError;
pub use target::TargetError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Target(#[from] TargetError),
}

pub type Result<T> = std::result::Result<T, Error>;
