// ── Credential provider seam ──
//
// The core never prompts. Front-ends decide where a password comes from
// (flag, keyring, terminal prompt) and hand the core a provider.

use secrecy::SecretString;

use crate::error::CoreError;

/// Supplies the password for a login.
pub trait CredentialProvider {
    fn password(&self, username: &str) -> Result<SecretString, CoreError>;
}

/// A password known up front.
#[derive(Debug, Clone)]
pub struct StaticCredentials(SecretString);

impl StaticCredentials {
    pub fn new(password: SecretString) -> Self {
        Self(password)
    }
}

impl CredentialProvider for StaticCredentials {
    fn password(&self, _username: &str) -> Result<SecretString, CoreError> {
        Ok(self.0.clone())
    }
}
