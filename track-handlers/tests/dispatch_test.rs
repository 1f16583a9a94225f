//! End-to-end dispatch tests: both handlers registered on a [`handler_chain::HandlerChain`],
//! driven with core messages the way the Telegram runner does.
//!
//! Covers: independent subscriptions (both handlers fire for `/start`), catch-all-only
//! dispatch for plain messages, the not-ready path producing no side effects, and
//! dispatch resolving when tracking fails.

mod common;

use std::sync::Arc;

use common::{make_message, MockBot, MockTracker};
use handler_chain::HandlerChain;
use track_handlers::{StartCommandHandler, TrackMessageHandler, GREETING};

fn build_chain(tracker: Arc<MockTracker>, bot: Arc<MockBot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartCommandHandler::new(tracker.clone(), bot)))
        .add_handler(Arc::new(TrackMessageHandler::new(tracker)))
}

/// **Test: `/start` fires both subscriptions: two tracking calls, one greeting.**
///
/// **Setup:** Ready tracker and recording bot behind both handlers.
/// **Action:** `chain.dispatch(&message)` with text "/start".
/// **Expected:** Two tracking calls (command handler + catch-all), exactly one send
/// `(100, greeting)`, report.completed == 2.
#[tokio::test]
async fn test_start_fires_both_handlers() {
    let tracker = Arc::new(MockTracker::ready());
    let bot = Arc::new(MockBot::new());
    let chain = build_chain(tracker.clone(), bot.clone());

    let report = chain.dispatch(&make_message(1, 42, 100, Some("/start"))).await;

    assert_eq!(report.completed, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(tracker.call_count(), 2);
    assert_eq!(bot.sent_messages(), vec![(100, GREETING.to_string())]);
}

/// **Test: A plain message only fires the catch-all.**
///
/// **Setup:** Same chain as above.
/// **Action:** `chain.dispatch(&message)` with text "hello".
/// **Expected:** One tracking call, no sends, report.ignored == 1 (start handler).
#[tokio::test]
async fn test_plain_message_fires_catch_all_only() {
    let tracker = Arc::new(MockTracker::ready());
    let bot = Arc::new(MockBot::new());
    let chain = build_chain(tracker.clone(), bot.clone());

    let report = chain.dispatch(&make_message(2, 42, 100, Some("hello"))).await;

    assert_eq!(report.completed, 1);
    assert_eq!(report.ignored, 1);
    assert_eq!(tracker.call_count(), 1);
    assert!(bot.sent_messages().is_empty());
}

/// **Test: Not-ready analytics produces no tracking and no reply, process keeps going.**
///
/// **Setup:** Not-ready tracker behind both handlers.
/// **Action:** `chain.dispatch(&message)` with text "/start".
/// **Expected:** Zero tracking calls, zero sends, report.failed == 2; dispatch
/// resolves (the readiness gap is logged, not propagated).
#[tokio::test]
async fn test_not_ready_dispatch_has_no_side_effects() {
    let tracker = Arc::new(MockTracker::not_ready());
    let bot = Arc::new(MockBot::new());
    let chain = build_chain(tracker.clone(), bot.clone());

    let report = chain.dispatch(&make_message(1, 42, 100, Some("/start"))).await;

    assert_eq!(tracker.call_count(), 0);
    assert!(bot.sent_messages().is_empty());
    assert_eq!(report.failed, 2);
}

/// **Test: Tracking failures are contained by the chain; dispatch resolves.**
///
/// **Setup:** Failing tracker behind both handlers.
/// **Action:** `chain.dispatch(&message)` with text "/start".
/// **Expected:** Both handlers attempted tracking (two calls), both failures
/// contained, no greeting; the dispatch future resolves rather than erroring.
#[tokio::test]
async fn test_tracking_failures_contained_by_chain() {
    let tracker = Arc::new(MockTracker::failing());
    let bot = Arc::new(MockBot::new());
    let chain = build_chain(tracker.clone(), bot.clone());

    let report = chain.dispatch(&make_message(1, 42, 100, Some("/start"))).await;

    assert_eq!(tracker.call_count(), 2);
    assert!(bot.sent_messages().is_empty());
    assert_eq!(report.failed, 2);
    assert_eq!(report.completed, 0);
}
