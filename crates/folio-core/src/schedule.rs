//! Owned, cancellable timers.
//!
//! Every timer in the portfolio is a [`ScheduledTask`] owned by whatever
//! component it animates. Cancelling the handle (explicitly, or by dropping
//! it) aborts the underlying tokio task and moves a shared state from
//! pending to cancelled. A final callback first claims the state with
//! [`CancelFlag::try_fire`]; cancel and claim are one compare-exchange on
//! the same atomic, so once `cancel` returns the callback can no longer
//! start.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Shortest period a repeating task may use.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// What a repeating task should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

const PENDING: u8 = 0;
const CANCELLED: u8 = 1;
const FIRED: u8 = 2;

/// Task side of the shared cancellation state, handed to task bodies.
#[derive(Debug, Clone)]
pub struct CancelFlag(Arc<AtomicU8>);

impl CancelFlag {
    /// Returns whether the owning handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire) == CANCELLED
    }

    /// Claims the right to run the task's final callback.
    ///
    /// Returns `false` when the handle was cancelled first. After a `true`,
    /// later cancels no longer affect the callback, and further claims fail.
    pub fn try_fire(&self) -> bool {
        self.0
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Handle to a scheduled task. Dropping it cancels the task.
#[derive(Debug)]
pub struct ScheduledTask {
    name: &'static str,
    state: Arc<AtomicU8>,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawns an arbitrary task body that receives the cancellation flag.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut>(name: &'static str, body: F) -> Self
    where
        F: FnOnce(CancelFlag) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Arc::new(AtomicU8::new(PENDING));
        let handle = tokio::spawn(body(CancelFlag(state.clone())));
        Self {
            name,
            state,
            handle,
        }
    }

    /// Runs `f` once after `delay`.
    pub fn once<F>(name: &'static str, delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(name, move |flag| async move {
            tokio::time::sleep(delay).await;
            if flag.try_fire() {
                f();
            }
        })
    }

    /// Runs `f` every `period`, first after one full period.
    ///
    /// `f` receives the 1-based tick number and decides whether the task
    /// keeps going.
    pub fn repeating<F>(name: &'static str, period: Duration, mut f: F) -> Self
    where
        F: FnMut(u64) -> Tick + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        Self::spawn(name, move |flag| async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks: u64 = 0;
            loop {
                interval.tick().await;
                if flag.is_cancelled() {
                    break;
                }
                ticks += 1;
                if f(ticks) == Tick::Stop {
                    break;
                }
            }
        })
    }

    /// Name given at spawn time, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cancels the task. Idempotent.
    ///
    /// A final callback that has not claimed the state yet will never run.
    pub fn cancel(&self) {
        let took_effect = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if took_effect && !self.handle.is_finished() {
            debug!(task = self.name, "Scheduled task cancelled");
        }
        self.handle.abort();
    }

    /// Returns whether a [`cancel`](Self::cancel) took effect, i.e. landed
    /// before the final callback was claimed.
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }

    /// Returns whether the final callback has been claimed.
    pub fn has_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == FIRED
    }

    /// Returns whether the task body has run to completion or been aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
