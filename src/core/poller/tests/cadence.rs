use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

use super::{PERIOD, ScriptedApi, poll_loop};
use crate::core::error::TransportError;
use crate::core::notifier::testing::RecordingNotifier;
use crate::core::poller::{LoopPhase, PollLoop};
use crate::core::review::ReviewApi;

#[tokio::test(start_paused = true)]
async fn ticks_once_per_period_until_shutdown() {
    let api = ScriptedApi::new(vec![Ok(json!({"homeworks": [], "current_date": 7}))]);
    let notifier = RecordingNotifier::default();
    let mut poller = poll_loop(&api, &notifier, 1);
    assert_eq!(poller.phase(), LoopPhase::Starting);

    let started = tokio::time::Instant::now();
    poller
        .run_until(tokio::time::sleep(Duration::from_secs(1250)))
        .await;

    // Ticks at 0s, 600s and 1200s; shutdown lands during the third sleep.
    assert_eq!(api.calls(), vec![1, 7, 7]);
    assert_eq!(notifier.sent().len(), 1);
    assert_eq!(poller.phase(), LoopPhase::Stopped);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(1250) && elapsed < Duration::from_secs(1800));
}

#[tokio::test(start_paused = true)]
async fn failures_do_not_shorten_the_sleep() {
    let api = ScriptedApi::new(vec![Err(500)]);
    let notifier = RecordingNotifier::default();
    let mut poller = poll_loop(&api, &notifier, 1);

    poller
        .run_until(tokio::time::sleep(Duration::from_secs(1799)))
        .await;

    assert_eq!(api.calls().len(), 3);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn immediate_shutdown_still_runs_the_first_tick() {
    let api = ScriptedApi::new(vec![Err(404)]);
    let notifier = RecordingNotifier::default();
    let mut poller = poll_loop(&api, &notifier, 1);

    poller.run_until(std::future::ready(())).await;

    assert_eq!(api.calls().len(), 1);
    assert_eq!(poller.phase(), LoopPhase::Stopped);
}

/// A review API that never answers.
struct HangingApi;

#[async_trait]
impl ReviewApi for HangingApi {
    async fn fetch(&self, _from_date: i64) -> Result<Value, TransportError> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn shutdown_interrupts_a_hung_fetch() {
    let notifier = RecordingNotifier::default();
    let mut poller = PollLoop::with_period(
        PERIOD,
        Box::new(HangingApi),
        Box::new(notifier.clone()),
        1,
    );

    tokio::time::timeout(
        Duration::from_secs(3600),
        poller.run_until(tokio::time::sleep(Duration::from_secs(5))),
    )
    .await
    .expect("poll loop ignored shutdown while a fetch was hanging");

    assert_eq!(poller.phase(), LoopPhase::Stopped);
    assert_eq!(poller.cursor(), 1);
    assert!(notifier.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ready_shutdown_stops_a_hung_first_tick() {
    let notifier = RecordingNotifier::default();
    let mut poller = PollLoop::with_period(
        PERIOD,
        Box::new(HangingApi),
        Box::new(notifier.clone()),
        1,
    );

    tokio::time::timeout(Duration::from_secs(3600), poller.run_until(std::future::ready(())))
        .await
        .expect("poll loop never observed a ready shutdown");

    assert_eq!(poller.phase(), LoopPhase::Stopped);
}
