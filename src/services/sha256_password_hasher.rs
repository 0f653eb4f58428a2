use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};

use crate::domain::{Password, PasswordDigest, PasswordHasher};

/// Legacy credential scheme: lowercase hex of an unsalted SHA-256 over the
/// UTF-8 password. Weak against offline guessing; kept because existing
/// `users` rows were written with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    #[tracing::instrument(name = "Computing password digest", skip_all)]
    fn hash(&self, password: &Password) -> Result<PasswordDigest> {
        let digest =
            Sha256::digest(password.as_ref().expose_secret().as_bytes());
        Ok(PasswordDigest::new(Secret::new(hex::encode(digest))))
    }
}
