mod cadence;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::error::TransportError;
use crate::core::notifier::testing::RecordingNotifier;
use crate::core::poller::PollLoop;
use crate::core::review::ReviewApi;

/// Canned replies: `Err(code)` becomes a non-success HTTP status.
type Reply = Result<Value, u16>;

/// Plays back scripted replies in order, repeating the last one once the
/// script runs out.
#[derive(Clone, Default)]
pub(super) struct ScriptedApi {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    last: Arc<Mutex<Option<Reply>>>,
    calls: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedApi {
    pub(super) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Self::default()
        }
    }

    /// `from_date` of every fetch, in order.
    pub(super) fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewApi for ScriptedApi {
    async fn fetch(&self, from_date: i64) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(from_date);
        let next = self.replies.lock().unwrap().pop_front();
        let reply = match next {
            Some(reply) => {
                *self.last.lock().unwrap() = Some(reply.clone());
                reply
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .expect("scripted api called with an empty script"),
        };
        reply.map_err(|status| TransportError::Status { status })
    }
}

pub(super) const PERIOD: Duration = Duration::from_secs(600);

pub(super) fn poll_loop(api: &ScriptedApi, notifier: &RecordingNotifier, cursor: i64) -> PollLoop {
    PollLoop::with_period(
        PERIOD,
        Box::new(api.clone()),
        Box::new(notifier.clone()),
        cursor,
    )
}
