// tests/support/mocks/photo_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use photovault::domain::errors::{DomainError, DomainResult};
use photovault::domain::photo::{
    NewPhoto, Photo, PhotoId, PhotoRepository, PhotoUpdate, PhotoUrl,
};
use photovault::domain::user::UserId;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Photo>,
}

/// メモリ上の写真リポジトリ。
///
/// - プロフィール写真の部分一意インデックスを `insert` で再現する（重複は `Conflict`）。
/// - `find_profile_photos` は await 前に yield し、並行実行の競合窓を広げる。
/// - `stale_profile_reads` 回だけ `find_profile_photos` が空を返す（他プロセスとの競合を模倣）。
/// - プロフィール写真の挿入試行回数と `Conflict` で拒否した回数を記録する。
#[derive(Default)]
pub struct InMemoryPhotoRepo {
    state: Mutex<State>,
    stale_profile_reads: AtomicUsize,
    profile_inserts: AtomicUsize,
    profile_conflicts: AtomicUsize,
}

impl InMemoryPhotoRepo {
    pub fn with_stale_profile_reads(count: usize) -> Self {
        Self {
            stale_profile_reads: AtomicUsize::new(count),
            ..Self::default()
        }
    }

    /// `insert` に渡されたプロフィール写真の件数（成功・失敗を問わない）
    pub fn profile_insert_attempts(&self) -> usize {
        self.profile_inserts.load(Ordering::SeqCst)
    }

    /// 一意性チェックで `Conflict` となったプロフィール写真の挿入件数
    pub fn profile_conflicts(&self) -> usize {
        self.profile_conflicts.load(Ordering::SeqCst)
    }

    /// 一意性チェックを経由せずに行を追加する（不整合データの再現用）。
    pub fn seed(
        &self,
        owner: UserId,
        url: &str,
        is_profile: bool,
        created_at: DateTime<Utc>,
    ) -> Photo {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let photo = Photo {
            id: PhotoId::new(id).unwrap(),
            title: None,
            caption: None,
            url: PhotoUrl::new(url).unwrap(),
            owner_id: owner,
            is_profile,
            created_at,
            updated_at: created_at,
        };
        state.rows.insert(id, photo.clone());
        photo
    }

    pub fn get(&self, id: i64) -> Option<Photo> {
        self.state.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn owned_by(&self, owner: UserId) -> Vec<Photo> {
        let state = self.state.lock().unwrap();
        state
            .rows
            .values()
            .filter(|p| p.owner_id == owner)
            .cloned()
            .collect()
    }

    pub fn profile_rows(&self, owner: UserId) -> Vec<Photo> {
        self.owned_by(owner)
            .into_iter()
            .filter(|p| p.is_profile)
            .collect()
    }

    pub fn remove_owned_by(&self, owner: UserId) {
        let mut state = self.state.lock().unwrap();
        state.rows.retain(|_, p| p.owner_id != owner);
    }

    fn take_stale_read(&self) -> bool {
        self.stale_profile_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl PhotoRepository for InMemoryPhotoRepo {
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        if photo.is_profile {
            self.profile_inserts.fetch_add(1, Ordering::SeqCst);
        }
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        if photo.is_profile
            && state
                .rows
                .values()
                .any(|p| p.owner_id == photo.owner_id && p.is_profile)
        {
            self.profile_conflicts.fetch_add(1, Ordering::SeqCst);
            return Err(DomainError::Conflict(
                "user already has a profile photo".into(),
            ));
        }
        state.next_id += 1;
        let id = state.next_id;
        let stored = Photo {
            id: PhotoId::new(id)?,
            title: photo.title,
            caption: photo.caption,
            url: photo.url,
            owner_id: photo.owner_id,
            is_profile: photo.is_profile,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        };
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PhotoUpdate) -> DomainResult<Photo> {
        let mut state = self.state.lock().unwrap();
        let photo = state
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("photo not found".into()))?;
        if let Some(title) = update.title {
            photo.title = Some(title);
        }
        if let Some(caption) = update.caption {
            photo.caption = Some(caption);
        }
        if let Some(url) = update.url {
            photo.url = url;
        }
        photo.updated_at = update.updated_at;
        Ok(photo.clone())
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("photo not found".into()))
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list_all(&self) -> DomainResult<Vec<Photo>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().rev().cloned().collect())
    }

    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Photo>> {
        let mut rows = self.owned_by(owner);
        rows.reverse();
        Ok(rows)
    }

    async fn find_profile_photos(&self, owner: UserId) -> DomainResult<Vec<Photo>> {
        tokio::task::yield_now().await;
        if self.take_stale_read() {
            return Ok(Vec::new());
        }
        let mut rows = self.profile_rows(owner);
        rows.sort_by_key(|p| (p.created_at, i64::from(p.id)));
        Ok(rows)
    }

    async fn clear_profile_flags(
        &self,
        owner: UserId,
        keep: PhotoId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut cleared = 0;
        for photo in state.rows.values_mut() {
            if photo.owner_id == owner && photo.is_profile && photo.id != keep {
                photo.is_profile = false;
                photo.updated_at = updated_at;
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}
