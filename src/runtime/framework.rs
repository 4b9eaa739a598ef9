//! Run-to-completion dispatcher for one top-level machine.

use crate::core::{Event, TimerId};
use crate::engine::{Behavior, HsmError, Machine, React};
use crate::runtime::queue::EventQueue;
use crate::runtime::timers::TickSource;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Outcome of draining the queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Events handed to the top-level machine
    pub dispatched: usize,
    /// Events that came back as a residual and were dropped
    pub unhandled: usize,
}

/// Owns a top-level machine, the context its reactions act on, and the
/// queue feeding it.
///
/// Events are delivered one at a time, oldest first, and each `dispatch`
/// runs to completion (including any exit/entry recursion) before the next
/// event is popped.
///
/// Expired timers whose `Timeout` did not fit in the queue are held back
/// and queued as soon as there is room, so a full queue delays a timeout
/// but never loses it.
pub struct Framework<B: Behavior, C> {
    machine: Machine<B>,
    ctx: C,
    queue: EventQueue<B::Domain>,
    overdue: VecDeque<TimerId>,
}

impl<B: Behavior, C> Framework<B, C> {
    pub fn new(behavior: B, ctx: C, capacity: usize) -> Self {
        Self {
            machine: Machine::new(behavior),
            ctx,
            queue: EventQueue::new(capacity),
            overdue: VecDeque::new(),
        }
    }

    pub fn machine(&self) -> &Machine<B> {
        &self.machine
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Events waiting to be dispatched, including held-back timeouts.
    pub fn pending(&self) -> usize {
        self.queue.len() + self.overdue.len()
    }

    /// Queue an externally sourced event (sensor, button, timer).
    ///
    /// # Errors
    ///
    /// Returns `HsmError::QueueFull` if the queue is at capacity.
    pub fn post(&mut self, event: Event<B::Domain>) -> Result<(), HsmError> {
        self.queue.post(event)
    }

    /// Move held-back timeouts into the queue, oldest first, until it is
    /// full again.
    fn flush_overdue(&mut self) -> Result<(), HsmError> {
        while let Some(&id) = self.overdue.front() {
            self.queue.post(Event::Timeout(id))?;
            self.overdue.pop_front();
        }
        Ok(())
    }
}

impl<B, C> Framework<B, C>
where
    B: React<C>,
{
    /// Initialize the top-level machine.
    ///
    /// # Errors
    ///
    /// Returns `HsmError::InitFault` if the machine fails to bootstrap. The
    /// caller decides whether to abort startup or retry.
    pub fn start(&mut self) -> Result<(), HsmError> {
        self.machine.try_init(&mut self.ctx)?;
        info!(
            machine = B::NAME,
            state = self.machine.state_name(),
            "state machine started"
        );
        Ok(())
    }

    /// Dispatch queued events until the queue is empty.
    ///
    /// Residuals that reach the top level are dropped and counted. Stray
    /// timeouts end up here too.
    ///
    /// # Errors
    ///
    /// Returns `HsmError::NotStarted` if `start` has not succeeded, and
    /// `HsmError::QueueFull` if held-back timeouts cannot be queued at all
    /// (a zero-capacity queue).
    pub fn run_to_idle(&mut self) -> Result<RunReport, HsmError> {
        if !self.machine.is_started() {
            return Err(HsmError::NotStarted { machine: B::NAME });
        }
        let mut report = RunReport::default();
        loop {
            let Some(event) = self.queue.pop() else {
                if self.overdue.is_empty() {
                    break;
                }
                self.flush_overdue()?;
                continue;
            };
            report.dispatched += 1;
            let residual = self.machine.dispatch(event, &mut self.ctx);
            if !residual.is_no_event() {
                debug!(
                    machine = B::NAME,
                    state = self.machine.state_name(),
                    event = %residual.kind(),
                    timer = ?residual.timer(),
                    "unhandled event dropped"
                );
                report.unhandled += 1;
            }
        }
        Ok(report)
    }
}

impl<B, C> Framework<B, C>
where
    B: Behavior,
    C: TickSource,
{
    /// Advance the context's timers and queue a `Timeout` per expiry.
    ///
    /// Timeouts still held back from an earlier tick are queued first.
    ///
    /// # Errors
    ///
    /// Returns `HsmError::QueueFull` if some timeouts did not fit. They stay
    /// held back and are queued by the next `tick` or `run_to_idle`.
    pub fn tick(&mut self, ticks: u32) -> Result<(), HsmError> {
        self.overdue.extend(self.ctx.advance(ticks));
        let result = self.flush_overdue();
        if result.is_err() {
            warn!(
                machine = B::NAME,
                held = self.overdue.len(),
                "event queue full, timeouts held back"
            );
        }
        result
    }
}
