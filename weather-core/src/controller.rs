//! Runs lookups on background tasks so a new submission can abandon the
//! previous one.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    error::{FetchError, LookupError},
    model::WeatherResult,
    provider::WeatherProvider,
    screen::{Submission, WeatherScreen},
};

type LookupTask = JoinHandle<Result<WeatherResult, LookupError>>;

#[derive(Debug)]
pub struct FetchController {
    provider: Arc<dyn WeatherProvider>,
    inflight: Option<(Submission, LookupTask)>,
}

impl FetchController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            inflight: None,
        }
    }

    /// Start a lookup for the screen's current query, aborting any lookup
    /// still in flight. Returns `false` when the query is blank.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, screen: &mut WeatherScreen) -> bool {
        let Some(submission) = screen.begin_submit() else {
            return false;
        };

        if let Some((previous, handle)) = self.inflight.take() {
            if !handle.is_finished() {
                debug!(city = %previous.city, "Aborting previous lookup");
            }
            handle.abort();
        }

        let provider = Arc::clone(&self.provider);
        let city = submission.city.clone();
        let handle = tokio::spawn(async move { provider.lookup(&city).await });
        self.inflight = Some((submission, handle));

        true
    }

    /// Wait for the in-flight lookup and apply it to the screen.
    ///
    /// A lookup task that panics or is aborted still ends `Loading`, as a
    /// fetch failure. Returns immediately if nothing is in flight. Dropping
    /// the returned future leaves the lookup in flight for a later call.
    pub async fn settle(&mut self, screen: &mut WeatherScreen) {
        let Some((submission, handle)) = self.inflight.as_mut() else {
            return;
        };

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(city = %submission.city, error = %err, "Lookup task did not finish");
                Err(LookupError::Fetch(FetchError::Aborted(err.to_string())))
            }
        };

        if let Some((submission, _)) = self.inflight.take() {
            screen.complete(&submission, outcome);
        }
    }

    /// Abandon the in-flight lookup, if any, and leave `Loading` with a fetch failure.
    pub fn cancel(&mut self, screen: &mut WeatherScreen) {
        let Some((submission, handle)) = self.inflight.take() else {
            return;
        };
        handle.abort();
        debug!(city = %submission.city, "Lookup cancelled");
        screen.complete(
            &submission,
            Err(LookupError::Fetch(FetchError::Aborted("cancelled by user".into()))),
        );
    }

    pub fn is_busy(&self) -> bool {
        self.inflight.as_ref().is_some_and(|(_, h)| !h.is_finished())
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.inflight.take() {
            handle.abort();
        }
    }
}
