use secrecy::{ExposeSecret, Secret};

/// A plaintext password as received from a client. Only ever handed to a
/// `PasswordHasher`.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Password {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Stored form of a password, as produced by a `PasswordHasher`.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PartialEq for PasswordDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl PasswordDigest {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Turns a plaintext password into its stored form.
///
/// Login looks users up by exact `(email, digest)` match, so implementations
/// must be deterministic: the same password always yields the same digest.
pub trait PasswordHasher {
    fn hash(
        &self,
        password: &Password,
    ) -> color_eyre::eyre::Result<PasswordDigest>;
}
