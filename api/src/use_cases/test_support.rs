use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{EpochSource, ErrorReporter};
use crate::domain::queries::EpochQuery;

// Answers Current with a fixed epoch and fails Broken like SQLite does.
#[derive(Clone)]
pub(crate) struct FixedEpochSource {
    epoch: i64,
    queries: Arc<Mutex<Vec<EpochQuery>>>,
}

impl FixedEpochSource {
    pub(crate) fn new(epoch: i64) -> Self {
        Self {
            epoch,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn queries(&self) -> Vec<EpochQuery> {
        self.queries.lock().expect("queries mutex poisoned").clone()
    }
}

#[async_trait]
impl EpochSource for FixedEpochSource {
    async fn unix_epoch(&self, query: EpochQuery) -> Result<i64, String> {
        self.queries
            .lock()
            .expect("queries mutex poisoned")
            .push(query);

        match query {
            EpochQuery::Current => Ok(self.epoch),
            EpochQuery::Broken => Err("no such function".to_string()),
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages mutex poisoned").clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn capture(&self, error: &(dyn std::error::Error + 'static)) {
        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .push(error.to_string());
    }
}
