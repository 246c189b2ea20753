//! State of the weather lookup screen.
//!
//! The screen owns the query text and exactly one [`RequestState`]. A
//! submission hands out a [`Submission`] ticket; only the ticket of the most
//! recent submission may move the screen out of `Loading`, so a slow earlier
//! response can never overwrite a newer one.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    error::LookupError,
    model::{CityQuery, WeatherResult},
    provider::WeatherProvider,
    render::{self, View},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one submission; ids grow with every accepted submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

/// Ticket for a lookup that the screen is waiting on.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub city: CityQuery,
    /// Wall-clock time of the submit, for logs.
    pub requested_at: DateTime<Utc>,
    /// Monotonic start, for measuring how long the lookup took.
    pub started: Instant,
}

#[derive(Debug, Default)]
pub struct WeatherScreen {
    query: String,
    state: RequestState,
    latest: Option<SubmissionId>,
    next_id: u64,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a lookup for the current query.
    ///
    /// Returns `None` without touching any state when the query is blank.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        let city = CityQuery::parse(&self.query)?;

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.latest = Some(id);
        self.state = RequestState::Loading;

        debug!(submission = id.0, city = %city, "Lookup started");

        Some(Submission {
            id,
            city,
            requested_at: Utc::now(),
            started: Instant::now(),
        })
    }

    /// Apply the outcome of a submission.
    ///
    /// Returns `false` if the submission was superseded and the outcome was dropped.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: Result<WeatherResult, LookupError>,
    ) -> bool {
        if self.latest != Some(submission.id) {
            debug!(submission = submission.id.0, "Dropping superseded lookup result");
            return false;
        }
        self.latest = None;

        let elapsed_ms = u64::try_from(submission.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let requested_at = submission.requested_at;
        self.state = match outcome {
            Ok(result) => {
                info!(city = %result.city, %requested_at, elapsed_ms, "Lookup succeeded");
                RequestState::Success(result)
            }
            Err(err) => {
                info!(error = %err, %requested_at, elapsed_ms, "Lookup failed");
                RequestState::Error(err.to_string())
            }
        };
        true
    }

    /// Submit and wait for the provider in one step.
    pub async fn submit<P>(&mut self, provider: &P)
    where
        P: WeatherProvider + ?Sized,
    {
        let Some(submission) = self.begin_submit() else {
            return;
        };
        let outcome = provider.lookup(&submission.city).await;
        self.complete(&submission, outcome);
    }

    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    pub fn view(&self) -> View {
        render::render(self)
    }
}
