// In-memory UserStore used by the unit tests. Ids are monotonic like
// AUTO_INCREMENT; order of `list` is insertion order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::UserStore;
use crate::models::User;
use crate::utils::error::AppError;

pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, name: &str, email: &str) -> Result<u64, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn update(&self, id: u64, name: &str, email: &str) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}
