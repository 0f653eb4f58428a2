use crate::domain::{
    Email, NewUser, PasswordDigest, User, UserId, UserStore, UserStoreError,
};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Email, User>,
    last_id: i64,
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.last_id += 1;
        let user = User::from_new(UserId::new(self.last_id), user);
        self.users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn find_user(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError> {
        match self.users.get(email) {
            Some(user) if user.password.eq(digest) => Ok(user.clone()),
            _ => Err(UserStoreError::UserNotFound),
        }
    }
}
