// tests/support/mocks/user_repo.rs
use super::photo_repo::InMemoryPhotoRepo;
use async_trait::async_trait;
use photovault::domain::errors::{DomainError, DomainResult};
use photovault::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
}

/// メモリ上のユーザーリポジトリ。email の一意制約と、写真へのカスケード削除を再現する。
#[derive(Default)]
pub struct InMemoryUserRepo {
    state: Mutex<State>,
    photos: Option<Arc<InMemoryPhotoRepo>>,
}

impl InMemoryUserRepo {
    pub fn with_photos(photos: Arc<InMemoryPhotoRepo>) -> Self {
        Self {
            state: Mutex::default(),
            photos: Some(photos),
        }
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if let Some(email) = &update.email {
            if state
                .users
                .iter()
                .any(|u| &u.email == email && u.id != update.id)
            {
                return Err(DomainError::Conflict("email already registered".into()));
            }
        }
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        {
            let mut state = self.state.lock().unwrap();
            let before = state.users.len();
            state.users.retain(|u| u.id != id);
            if state.users.len() == before {
                return Err(DomainError::NotFound("user not found".into()));
            }
        }
        if let Some(photos) = &self.photos {
            photos.remove_owned_by(id);
        }
        Ok(())
    }
}
