// Form status service

use evaluations_core::{FormStore, Result, Status};
use std::sync::Arc;

pub struct StatusService {
    store: Arc<dyn FormStore>,
}

impl StatusService {
    pub fn new(store: Arc<dyn FormStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Status>> {
        self.store.list_statuses().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageBackend;

    #[tokio::test]
    async fn test_list_seeded_statuses() {
        let svc = StatusService::new(Arc::new(StorageBackend::in_memory()));

        let statuses = svc.list().await.unwrap();

        let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Pending", "In Review", "Approved", "Rejected"]);
    }
}
