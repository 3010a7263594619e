use std::sync::Arc;

use crate::domain::photo::PhotoRepository;

pub struct PhotoQueryService {
    pub(super) photo_repo: Arc<dyn PhotoRepository>,
}

impl PhotoQueryService {
    pub fn new(photo_repo: Arc<dyn PhotoRepository>) -> Self {
        Self { photo_repo }
    }
}
