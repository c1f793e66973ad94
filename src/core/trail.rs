use std::collections::VecDeque;

/// Bounded FIFO of live trail nodes.
///
/// Pushing into a full pool evicts the oldest node first, so the number of
/// live nodes never exceeds `capacity`.
#[derive(Debug)]
pub struct TrailPool<T> {
    nodes: VecDeque<T>,
    capacity: usize,
}

impl<T: PartialEq> TrailPool<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            nodes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node; returns the evicted node the caller must detach now.
    pub fn push(&mut self, node: T) -> Option<T> {
        let evicted = if self.nodes.len() >= self.capacity {
            self.nodes.pop_front()
        } else {
            None
        };
        self.nodes.push_back(node);
        evicted
    }

    /// Lifetime elapsed. `None` if the node was already evicted.
    pub fn expire(&mut self, node: &T) -> Option<T> {
        let idx = self.nodes.iter().position(|n| n == node)?;
        self.nodes.remove(idx)
    }

    pub fn contains(&self, node: &T) -> bool {
        self.nodes.contains(node)
    }

    /// Drop every live node, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        self.nodes.drain(..).collect()
    }
}
