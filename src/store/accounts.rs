use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{User, UserId};
use crate::store::persist;
use crate::utils::error::AppError;

/// On-disk document: the user collection plus the id high-water mark.
#[derive(Deserialize)]
struct AccountsFile {
    users: BTreeMap<UserId, User>,
    next_user_id: UserId,
}

impl Default for AccountsFile {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_user_id: 1,
        }
    }
}

#[derive(Serialize)]
struct AccountsSnapshot<'a> {
    users: &'a BTreeMap<UserId, User>,
    next_user_id: UserId,
}

pub struct AccountStore {
    users: BTreeMap<UserId, User>,
    next_user_id: UserId,
    path: PathBuf,
}

impl AccountStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut file: AccountsFile = persist::load_or_default(&path);
        // The counter must stay ahead of every id ever issued.
        if let Some((&max_id, _)) = file.users.last_key_value() {
            if file.next_user_id <= max_id {
                file.next_user_id = max_id + 1;
            }
        }
        Self {
            users: file.users,
            next_user_id: file.next_user_id,
            path,
        }
    }

    fn generate_user_id(&mut self) -> UserId {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    pub fn create_account(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if self.users.values().any(|user| user.email == email) {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }
        let id = self.generate_user_id();
        let user = User::new(id, name, email, password);
        self.users.insert(id, user.clone());
        self.persist();
        Ok(user)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Linear scan; both email and password must match.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.email == email && user.password == password)
    }

    pub fn update_user(
        &mut self,
        id: UserId,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> bool {
        match self.users.get_mut(&id) {
            Some(user) => {
                user.update_profile(name, email, password);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn delete_user(&mut self, id: UserId) -> bool {
        if self.users.remove(&id).is_some() {
            self.persist();
            true
        } else {
            false
        }
    }

    pub(crate) fn persist(&self) {
        persist::save_or_report(
            &self.path,
            &AccountsSnapshot {
                users: &self.users,
                next_user_id: self.next_user_id,
            },
        );
    }
}
