use metrics_exporter_prometheus::PrometheusHandle;
use readiness::assessment::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session store bounded to `capacity` live sessions.
#[derive(Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
    capacity: usize,
}

impl InMemorySessionRepository {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            capacity,
        }
    }

    fn records(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store lock poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        if guard.len() >= self.capacity {
            return Err(RepositoryError::CapacityExceeded(self.capacity));
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.records()?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
