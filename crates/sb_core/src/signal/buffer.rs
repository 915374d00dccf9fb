//! Bounded ring of recent samples, oldest first

use std::collections::VecDeque;

use crate::geometry::{Axis, Point2D};

/// Fixed-capacity sliding window of [`Point2D`] samples.
///
/// Insertion order is temporal; once full, each push evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct SignalBuffer {
    samples: VecDeque<Point2D>,
    capacity: usize,
    /// Whether the window has been full at least once
    filled: bool,
}

impl SignalBuffer {
    /// Capacity is clamped to at least one sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity, filled: false }
    }

    /// Append a sample, or carry the newest one forward when `sample` is absent.
    ///
    /// An absent sample on a never-fed buffer appends the origin.
    pub fn push(&mut self, sample: Option<Point2D>) {
        let value = match sample {
            Some(point) => point,
            None => self.newest().unwrap_or(Point2D::ORIGIN),
        };

        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);

        if self.samples.len() == self.capacity {
            self.filled = true;
        }
    }

    /// Window contents, oldest to newest.
    pub fn window(&self) -> Vec<Point2D> {
        self.samples.iter().copied().collect()
    }

    pub fn oldest(&self) -> Option<Point2D> {
        self.samples.front().copied()
    }

    pub fn newest(&self) -> Option<Point2D> {
        self.samples.back().copied()
    }

    /// Newest minus oldest along `axis`; `None` while empty.
    pub fn net_delta(&self, axis: Axis) -> Option<f32> {
        let oldest = self.oldest()?;
        let newest = self.newest()?;
        Some(newest.along(axis) - oldest.along(axis))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once the buffer has held `capacity` samples.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Drop every sample (full match reset only).
    pub fn clear(&mut self) {
        self.samples.clear();
        self.filled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_none_into_empty_yields_origin() {
        let mut buf = SignalBuffer::new(15);
        buf.push(None);
        assert_eq!(buf.window(), vec![Point2D::ORIGIN]);
    }

    #[test]
    fn test_none_duplicates_newest() {
        let mut buf = SignalBuffer::new(4);
        buf.push(Some(p(1.0, 2.0)));
        buf.push(Some(p(3.0, 4.0)));
        buf.push(None);
        assert_eq!(buf.window(), vec![p(1.0, 2.0), p(3.0, 4.0), p(3.0, 4.0)]);
    }

    #[test]
    fn test_carry_forward_keeps_length_at_capacity() {
        let mut buf = SignalBuffer::new(3);
        for i in 0..3 {
            buf.push(Some(p(i as f32, 0.0)));
        }
        assert_eq!(buf.len(), 3);

        buf.push(None);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.window(), vec![p(1.0, 0.0), p(2.0, 0.0), p(2.0, 0.0)]);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut buf = SignalBuffer::new(2);
        buf.push(Some(p(1.0, 1.0)));
        buf.push(Some(p(2.0, 2.0)));
        buf.push(Some(p(3.0, 3.0)));
        assert_eq!(buf.oldest(), Some(p(2.0, 2.0)));
        assert_eq!(buf.newest(), Some(p(3.0, 3.0)));
    }

    #[test]
    fn test_filled_flag_and_clear() {
        let mut buf = SignalBuffer::new(2);
        assert!(!buf.is_filled());
        buf.push(None);
        assert!(!buf.is_filled());
        buf.push(None);
        assert!(buf.is_filled());

        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.is_filled());
    }

    #[test]
    fn test_net_delta() {
        let mut buf = SignalBuffer::new(3);
        assert_eq!(buf.net_delta(Axis::X), None);

        buf.push(Some(p(200.0, 100.0)));
        buf.push(Some(p(180.0, 90.0)));
        buf.push(Some(p(140.0, 60.0)));
        assert_eq!(buf.net_delta(Axis::X), Some(-60.0));
        assert_eq!(buf.net_delta(Axis::Y), Some(-40.0));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut buf = SignalBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.push(Some(p(5.0, 5.0)));
        buf.push(Some(p(6.0, 6.0)));
        assert_eq!(buf.window(), vec![p(6.0, 6.0)]);
    }
}
