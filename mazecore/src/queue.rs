use std::collections::VecDeque;

use crate::error::{MazeError, MazeResult};

/// FIFO queue that accepts at most `capacity` items over its whole lifetime.
///
/// Dequeuing doesn't make room again, a search that puts any cell in twice runs out of space.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
    high_water: usize,
    total_enqueued: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            high_water: 0,
            total_enqueued: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) -> MazeResult<()> {
        if self.total_enqueued >= self.capacity {
            return Err(MazeError::QueueFull {
                capacity: self.capacity,
            });
        }

        self.items.push_back(item);
        self.total_enqueued += 1;
        self.high_water = self.high_water.max(self.items.len());
        Ok(())
    }

    pub fn dequeue(&mut self) -> MazeResult<T> {
        self.items.pop_front().ok_or(MazeError::QueueEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most items held at once since creation.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn total_enqueued(&self) -> usize {
        self.total_enqueued
    }
}
