// src/model/queues.rs

use std::collections::VecDeque;

/// Fixed-delay pipeline between order placement and receipt.
///
/// The buffer is pre-filled with `delay` empty slots, so whatever enters on
/// day `t` leaves on day `t + delay`. Nothing can leave before it entered.
#[derive(Debug, Clone)]
pub struct TimeDelayQueue {
    buffer: VecDeque<f64>,
}

impl TimeDelayQueue {
    pub fn new(delay: usize) -> Self {
        let mut buffer = VecDeque::with_capacity(delay + 1);
        for _ in 0..delay {
            buffer.push_back(0.0);
        }

        Self { buffer }
    }

    /// Pushes today's departure and returns today's arrival.
    ///
    /// The push happens first so a zero-day delay hands the item straight
    /// back.
    pub fn advance(&mut self, departure: f64) -> f64 {
        self.buffer.push_back(departure);
        self.buffer.pop_front().unwrap_or(0.0)
    }
}
