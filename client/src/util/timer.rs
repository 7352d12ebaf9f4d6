//! Delayed-callback scheduling with cancel-on-drop handles.
//!
//! DESIGN
//! ======
//! Components schedule through the `Scheduler` trait so the dismiss timing
//! can be driven by a manual clock in tests. In the browser the handle is a
//! `gloo_timers` `Timeout`, whose `Drop` clears the underlying JS timer.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle before the delay elapses must guarantee the
/// callback never runs.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

/// A scheduled auto-dismiss owned by the component that started it.
pub struct AutoDismiss<H> {
    handle: Option<H>,
}

impl<H> AutoDismiss<H> {
    /// Schedule `on_fire` to run once after `delay_ms`.
    pub fn start<S>(scheduler: &S, delay_ms: u32, on_fire: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        Self {
            handle: Some(scheduler.schedule(delay_ms, Box::new(on_fire))),
        }
    }

    /// Cancel the pending callback. Safe to call after it fired or twice.
    pub fn cancel(&mut self) {
        self.handle.take();
    }
}
