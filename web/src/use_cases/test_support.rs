use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Backend, BackendResponse, ErrorReporter, FetchError, ReportContext};

// One captured call to the reporter.
#[derive(Clone, Debug)]
pub(crate) struct Report {
    pub message: String,
    pub context: ReportContext,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reports(&self) -> Vec<Report> {
        self.reports.lock().expect("reports mutex poisoned").clone()
    }

    pub(crate) fn count(&self) -> usize {
        self.reports.lock().expect("reports mutex poisoned").len()
    }
}

impl ErrorReporter for RecordingReporter {
    fn capture(&self, error: &(dyn std::error::Error + 'static), context: &ReportContext) {
        let mut guard = self.reports.lock().expect("reports mutex poisoned");
        guard.push(Report {
            message: error.to_string(),
            context: context.clone(),
        });
    }
}

#[derive(Clone, Copy)]
enum Script {
    Respond {
        status: u16,
        reason: Option<&'static str>,
        body: Option<&'static str>,
    },
    Refuse,
}

// Backend fake that answers every fetch the same way and records requests.
#[derive(Clone)]
pub(crate) struct ScriptedBackend {
    script: Script,
    requests: Arc<Mutex<Vec<(String, bool)>>>,
}

impl ScriptedBackend {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn ok(body: &'static str) -> Self {
        Self::with_script(Script::Respond {
            status: 200,
            reason: Some("OK"),
            body: Some(body),
        })
    }

    pub(crate) fn status(status: u16, reason: Option<&'static str>, body: &'static str) -> Self {
        Self::with_script(Script::Respond {
            status,
            reason,
            body: Some(body),
        })
    }

    pub(crate) fn undecodable(status: u16) -> Self {
        Self::with_script(Script::Respond {
            status,
            reason: None,
            body: None,
        })
    }

    pub(crate) fn unreachable() -> Self {
        Self::with_script(Script::Refuse)
    }

    pub(crate) fn requests(&self) -> Vec<(String, bool)> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn fetch(&self, path: &str, no_store: bool) -> Result<BackendResponse, FetchError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push((path.to_string(), no_store));

        match self.script {
            Script::Respond {
                status,
                reason,
                body,
            } => Ok(BackendResponse {
                status,
                reason: reason.map(str::to_string),
                body: body
                    .map(str::to_string)
                    .ok_or_else(|| FetchError::Decode("invalid utf-8".to_string())),
            }),
            Script::Refuse => Err(FetchError::Transport("connection refused".to_string())),
        }
    }
}
