//! Binary Event Signal

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// State shared by both halves
struct Shared {
    /// Set by `raise`, cleared by the wake that consumes it
    raised: AtomicBool,
    notify: Notify,
}

/// Binary "consume now" signal.
///
/// Holds at most one pending wake. Raising an already-raised signal is a
/// no-op, so a burst of raises before the waiter runs produces exactly one
/// wake and no count of the extra raises is kept. This holds whether the
/// waiter is already parked or has not reached `wait` yet.
pub struct EventSignal;

impl EventSignal {
    /// Create a connected sender/waiter pair
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (SignalSender, SignalWaiter) {
        let shared = Arc::new(Shared {
            raised: AtomicBool::new(false),
            notify: Notify::new(),
        });
        (
            SignalSender {
                shared: Arc::clone(&shared),
            },
            SignalWaiter { shared },
        )
    }
}

/// Raising half of the signal.
///
/// `raise` is the only operation: synchronous, non-blocking and
/// non-allocating, so it is safe to call from interrupt-equivalent context.
#[derive(Clone)]
pub struct SignalSender {
    shared: Arc<Shared>,
}

impl SignalSender {
    /// Set the signal (coalesces with a pending, unconsumed raise)
    #[inline]
    pub fn raise(&self) {
        self.shared.raised.store(true, Ordering::Release);
        self.shared.notify.notify_one();
    }
}

/// Waiting half of the signal; owned by the single consumer
pub struct SignalWaiter {
    shared: Arc<Shared>,
}

impl SignalWaiter {
    /// Wait indefinitely for the signal, clearing it on wake
    pub async fn wait(&mut self) {
        loop {
            // A leftover Notify permit only costs one extra flag check
            if self.shared.raised.swap(false, Ordering::AcqRel) {
                return;
            }
            self.shared.notify.notified().await;
        }
    }
}
