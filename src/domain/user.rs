use serde::{Deserialize, Serialize};

use super::{Email, PasswordDigest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for UserId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

/// A registration that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub fullname: String,
    pub email: Email,
    pub password: PasswordDigest,
}

impl NewUser {
    pub fn new(fullname: String, email: Email, password: PasswordDigest) -> Self {
        Self {
            fullname,
            email,
            password,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub fullname: String,
    pub email: Email,
    pub password: PasswordDigest,
}

impl User {
    pub fn from_new(id: UserId, user: NewUser) -> Self {
        Self {
            id,
            fullname: user.fullname,
            email: user.email,
            password: user.password,
        }
    }
}
