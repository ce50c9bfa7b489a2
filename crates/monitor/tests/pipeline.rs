//! Sampler to Consumer Pipeline Tests

use event_signal::{EventSignal, FallingEdgeDetector};
use monitor::tasks::{ConsumerTask, SamplerTask};
use ring_buffer::{GuardedRing, SnapshotOutcome, BUFFER_SIZE};
use sensor_input::{LuxConverter, ReplaySource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const PERIOD: Duration = Duration::from_millis(200);

fn ring() -> Arc<GuardedRing<BUFFER_SIZE>> {
    Arc::new(GuardedRing::new(Duration::from_millis(100)))
}

fn sampler(
    readings: Vec<u16>,
    ring: &Arc<GuardedRing<BUFFER_SIZE>>,
) -> SamplerTask<ReplaySource, BUFFER_SIZE> {
    SamplerTask::new(
        ReplaySource::new(readings),
        LuxConverter::default(),
        Arc::clone(ring),
        PERIOD,
    )
}

#[tokio::test(start_paused = true)]
async fn test_button_press_summarizes_full_ring() {
    let ring = ring();
    let (sender, waiter) = EventSignal::new();
    let mut detector = FallingEdgeDetector::attach(sender);
    let mut consumer = ConsumerTask::new(Arc::clone(&ring), waiter);

    let handle = tokio::spawn(sampler(vec![2048], &ring).run());

    // 60 samples: the ring has wrapped
    tokio::time::sleep(PERIOD * 59 + Duration::from_millis(100)).await;
    detector.on_level(false);

    consumer.wait_for_trigger().await;
    let report = consumer.process().await;
    handle.abort();

    let lux = LuxConverter::default().convert(2048);
    assert_eq!(report.freshness, SnapshotOutcome::Fresh);
    assert_eq!(report.stats.count, BUFFER_SIZE);
    assert_eq!(report.stats.min, lux);
    assert_eq!(report.stats.max, lux);
    assert!((report.stats.mean - lux).abs() < 1e-9);
    assert!(report.stats.std_dev < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn test_early_press_includes_zero_slots() {
    let ring = ring();
    let (_sender, waiter) = EventSignal::new();
    let mut consumer = ConsumerTask::new(Arc::clone(&ring), waiter);

    let mut task = sampler(vec![2048], &ring);
    for _ in 0..5 {
        task.sample_once().await;
    }

    let report = consumer.process().await;
    let lux = LuxConverter::default().convert(2048);
    assert_eq!(report.stats.min, 0.0);
    assert_eq!(report.stats.max, lux);
    assert!((report.stats.mean - lux * 5.0 / BUFFER_SIZE as f64).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn test_press_burst_wakes_consumer_once() {
    let ring = ring();
    let (sender, waiter) = EventSignal::new();
    let mut detector = FallingEdgeDetector::attach(sender);
    let mut consumer = ConsumerTask::new(Arc::clone(&ring), waiter);

    for _ in 0..3 {
        detector.on_level(false);
        detector.on_level(true);
    }

    assert!(timeout(Duration::from_millis(10), consumer.wait_for_trigger()).await.is_ok());
    assert!(timeout(Duration::from_millis(10), consumer.wait_for_trigger()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_presses_while_consumer_parked_wake_it_once() {
    let ring = ring();
    let (sender, waiter) = EventSignal::new();
    let mut detector = FallingEdgeDetector::attach(sender);
    let mut consumer = ConsumerTask::new(Arc::clone(&ring), waiter);
    let reports = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&reports);
    let handle = tokio::spawn(async move {
        loop {
            consumer.wait_for_trigger().await;
            consumer.process().await;
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    // Consumer parks before the edges arrive
    tokio::task::yield_now().await;
    detector.on_level(false);
    detector.on_level(true);
    detector.on_level(false);

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();

    assert_eq!(reports.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_contention_drops_samples_without_corruption() {
    let ring = ring();
    let (_sender, waiter) = EventSignal::new();
    let mut consumer = ConsumerTask::new(Arc::clone(&ring), waiter);
    let mut task = sampler(vec![1000, 2000, 3000], &ring);

    task.sample_once().await;
    task.sample_once().await;
    let before = consumer.process().await;

    {
        let _held = ring.acquire().await.unwrap();
        task.sample_once().await;
    }
    assert_eq!(task.dropped(), 1);

    let after = consumer.process().await;
    assert_eq!(after.freshness, SnapshotOutcome::Fresh);
    assert_eq!(after.stats, before.stats);
}

#[tokio::test(start_paused = true)]
async fn test_sampler_keeps_phase_while_ring_is_contended() {
    let ring = ring();
    let handle = tokio::spawn(sampler(vec![2048], &ring).run());

    // Let the sampler write at 0ms, then hold the ring across the 200ms sample
    tokio::time::sleep(Duration::from_millis(150)).await;
    {
        let _held = ring.acquire().await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    // Samples at 400, 600 and 800ms land on schedule
    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.abort();

    let access = ring.acquire().await.unwrap();
    assert_eq!(access.total_written(), 4);
}
