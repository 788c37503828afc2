use crate::physics::math::Vector;
use bevy::prelude::*;
use std::collections::VecDeque;

/// Fixed-capacity history of a body's past positions, used by the host for
/// trail rendering.
///
/// A true ring: appending to a full history evicts the oldest sample in
/// O(1), never a shift. Samples are ordered oldest first.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: VecDeque<Vector>,
    capacity: usize,
}

impl Trajectory {
    /// Create an empty history. Capacity must be positive; the mutation
    /// gateway rejects zero before it can reach here.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vector) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(position);
    }

    /// Change the capacity in place. Shrinking discards the oldest excess
    /// immediately; growing leaves the ring partially filled.
    pub fn resize(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&Vector> {
        self.samples.back()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
