use crate::directory::record_model::{Hospital, RawHospital, map_hospitals};
use crate::directory::source::{FetchError, HospitalSource};

/// Result of the one fetch a loader performs.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Ready(Vec<Hospital>),
    Failed(String),
}

/// Fetches the hospital list once per screen mount.
///
/// `load` fires at most one request over the loader's lifetime. A new mount
/// means a new loader; nothing is cached across them.
pub struct RemoteListLoader {
    source: Box<dyn HospitalSource>,
    loading: bool,
    outcome: Option<LoadOutcome>,
}

impl RemoteListLoader {
    pub fn new(source: Box<dyn HospitalSource>) -> Self {
        Self {
            source,
            loading: false,
            outcome: None,
        }
    }

    /// Perform the fetch if it hasn't happened yet and return its outcome.
    ///
    /// Failures are logged and recorded as [`LoadOutcome::Failed`]; the
    /// hospital list stays empty and loading ends either way.
    pub fn load(&mut self) -> &LoadOutcome {
        if self.begin_load() {
            let result = self.source.fetch();
            return self.complete(result);
        }
        // Already loaded: complete keeps the first outcome. A begin_load
        // without its complete is closed out as a failure here.
        self.complete(Err(FetchError::Unavailable("load already in progress".into())))
    }

    /// Mark a fetch as started. Returns false when this loader has already
    /// fetched or is fetching, in which case the caller must not fetch.
    pub fn begin_load(&mut self) -> bool {
        if self.loading || self.outcome.is_some() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Record the result of the fetch started by [`begin_load`](Self::begin_load)
    /// and end the loading phase. A later call keeps the first outcome.
    pub fn complete(&mut self, result: Result<Vec<RawHospital>, FetchError>) -> &LoadOutcome {
        self.loading = false;
        self.outcome.get_or_insert_with(|| match result {
            Ok(raw) => {
                let hospitals = map_hospitals(raw);
                tracing::info!(count = hospitals.len(), "hospital list loaded");
                LoadOutcome::Ready(hospitals)
            }
            Err(e) => {
                tracing::warn!("failed to load hospital list: {}", e);
                LoadOutcome::Failed(e.to_string())
            }
        })
    }

    /// True between [`begin_load`](Self::begin_load) and
    /// [`complete`](Self::complete); `load` runs both, so callers of `load`
    /// always see false afterwards.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_loaded(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&LoadOutcome> {
        self.outcome.as_ref()
    }

    /// Loaded hospitals; empty before a load and after a failed one.
    pub fn hospitals(&self) -> &[Hospital] {
        match &self.outcome {
            Some(LoadOutcome::Ready(hospitals)) => hospitals,
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.outcome {
            Some(LoadOutcome::Failed(reason)) => Some(reason),
            _ => None,
        }
    }
}
