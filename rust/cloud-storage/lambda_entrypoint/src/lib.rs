#![deny(missing_docs)]
//! Process start-up shared by the lambda binaries.
//! Loads `.env`, installs the panic hook and selects the tracing subscriber for the runtime environment.

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{Environment, UnknownEnvironment};

/// Describes how the lambda process should be initialized
#[derive(Debug)]
pub struct LambdaEntrypoint {
    env: Environment,
}

impl Default for LambdaEntrypoint {
    fn default() -> Self {
        Self::new(Environment::from_env_or_prod())
    }
}

/// proof that [LambdaEntrypoint::init] ran
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// the environment the process was initialized for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl LambdaEntrypoint {
    /// create a new entrypoint for the given [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self and install the process wide hooks
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment = %self.env, "initialized entrypoint");

        InitializedEntrypoint { env: self.env }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_keeps_the_requested_environment() {
        let initialized = LambdaEntrypoint::new(Environment::Develop).init();
        assert_eq!(initialized.environment(), Environment::Develop);
    }
}
