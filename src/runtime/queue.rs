//! Bounded FIFO event queue.

use crate::core::Event;
use crate::engine::HsmError;
use std::collections::VecDeque;

/// Default number of events a queue holds before `post` fails.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Bounded first-in, first-out queue of pending events.
#[derive(Clone, Debug)]
pub struct EventQueue<D> {
    events: VecDeque<Event<D>>,
    capacity: usize,
}

impl<D> EventQueue<D> {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event.
    ///
    /// # Errors
    ///
    /// Returns `HsmError::QueueFull` when the queue is at capacity; the
    /// event is not queued.
    pub fn post(&mut self, event: Event<D>) -> Result<(), HsmError> {
        if self.events.len() >= self.capacity {
            return Err(HsmError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.events.push_back(event);
        Ok(())
    }

    /// Remove the oldest event.
    pub fn pop(&mut self) -> Option<Event<D>> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<D> Default for EventQueue<D> {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
