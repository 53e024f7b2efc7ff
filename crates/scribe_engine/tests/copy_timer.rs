use std::sync::mpsc;
use std::time::Duration;

use scribe_engine::CopyTimer;
use tokio::runtime::Handle;

fn timer_with_channel() -> (CopyTimer, mpsc::Sender<u64>, mpsc::Receiver<u64>) {
    let (tx, rx) = mpsc::channel();
    (CopyTimer::new(Handle::current()), tx, rx)
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_delay() {
    let (mut timer, tx, rx) = timer_with_channel();
    timer.schedule(Duration::from_millis(2000), move || {
        let _ = tx.send(1);
    });
    assert!(timer.is_pending());

    advance(1999).await;
    assert!(rx.try_recv().is_err());

    advance(2).await;
    assert_eq!(rx.try_recv(), Ok(1));
    assert!(!timer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn rescheduling_cancels_previous_expiry() {
    let (mut timer, tx, rx) = timer_with_channel();
    let first = tx.clone();
    timer.schedule(Duration::from_millis(2000), move || {
        let _ = first.send(1);
    });

    advance(1000).await;
    timer.schedule(Duration::from_millis(2000), move || {
        let _ = tx.send(2);
    });

    advance(1500).await;
    assert!(rx.try_recv().is_err());

    advance(600).await;
    assert_eq!(rx.try_recv(), Ok(2));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn dropping_timer_cancels_pending_expiry() {
    let (mut timer, tx, rx) = timer_with_channel();
    timer.schedule(Duration::from_millis(2000), move || {
        let _ = tx.send(1);
    });
    drop(timer);

    advance(3000).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn explicit_cancel_stops_expiry() {
    let (mut timer, tx, rx) = timer_with_channel();
    timer.schedule(Duration::from_millis(10), move || {
        let _ = tx.send(1);
    });
    timer.cancel();
    assert!(!timer.is_pending());

    advance(50).await;
    assert!(rx.try_recv().is_err());
}
