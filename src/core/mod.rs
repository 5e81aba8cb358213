//! Core infrastructure: error handling, numeric types, defaults, and the
//! learner traits shared by the tree and boosting modules.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{GbrtError, Result};

/// Install the `env_logger` backend for the `log` facade.
///
/// Defaults to the `info` level unless `RUST_LOG` says otherwise. Calling it
/// more than once, or after another logger was installed, is harmless.
pub fn initialize_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logging initialized (gbrt-rust {})", constants::GBRT_RUST_VERSION);
    }
}
