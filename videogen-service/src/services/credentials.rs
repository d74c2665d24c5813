use secrecy::Secret;
use service_core::error::AppError;
use std::env;

/// Reads the provider token from the process environment on every call,
/// so the value can change without a restart.
#[derive(Debug, Clone)]
pub struct CredentialSource {
    env_var: String,
}

impl CredentialSource {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// An empty value counts as unset.
    pub fn read(&self) -> Option<Secret<String>> {
        env::var(&self.env_var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Secret::new)
    }

    pub fn is_configured(&self) -> bool {
        self.read().is_some()
    }

    pub fn require(&self) -> Result<Secret<String>, AppError> {
        self.read()
            .ok_or_else(|| AppError::MissingConfiguration(self.env_var.clone()))
    }
}
