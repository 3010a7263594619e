use std::sync::Arc;

use super::locks::OwnerLocks;
use crate::{application::ports::time::Clock, domain::photo::PhotoRepository};

pub struct PhotoCommandService {
    pub(super) photo_repo: Arc<dyn PhotoRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) owner_locks: OwnerLocks,
}

impl PhotoCommandService {
    pub fn new(photo_repo: Arc<dyn PhotoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            photo_repo,
            clock,
            owner_locks: OwnerLocks::default(),
        }
    }
}
