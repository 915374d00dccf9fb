use serde::{Deserialize, Serialize};

use super::SignalBuffer;
use crate::geometry::Point2D;

/// Default hand window length (ticks)
pub const HAND_WINDOW: usize = 15;

/// Default head window length (ticks)
pub const HEAD_WINDOW: usize = 30;

/// Tracked body landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    LeftHand,
    RightHand,
    Head,
}

/// One tick of pose observations; `None` means not detected this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<Point2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<Point2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Point2D>,
}

impl PoseSample {
    pub const EMPTY: PoseSample = PoseSample { left_hand: None, right_hand: None, head: None };

    pub fn get(&self, landmark: Landmark) -> Option<Point2D> {
        match landmark {
            Landmark::LeftHand => self.left_hand,
            Landmark::RightHand => self.right_hand,
            Landmark::Head => self.head,
        }
    }

    /// True when neither hand nor head was detected.
    pub fn is_empty(&self) -> bool {
        self.left_hand.is_none() && self.right_hand.is_none() && self.head.is_none()
    }
}

/// The three windows owned by a vision-controlled fighter.
#[derive(Debug, Clone)]
pub struct LandmarkBuffers {
    pub left_hand: SignalBuffer,
    pub right_hand: SignalBuffer,
    pub head: SignalBuffer,
}

impl Default for LandmarkBuffers {
    fn default() -> Self {
        Self::new(HAND_WINDOW, HEAD_WINDOW)
    }
}

impl LandmarkBuffers {
    pub fn new(hand_capacity: usize, head_capacity: usize) -> Self {
        Self {
            left_hand: SignalBuffer::new(hand_capacity),
            right_hand: SignalBuffer::new(hand_capacity),
            head: SignalBuffer::new(head_capacity),
        }
    }

    /// Append one tick of observations to every window (carry-forward on `None`).
    pub fn push(&mut self, sample: &PoseSample) {
        self.left_hand.push(sample.left_hand);
        self.right_hand.push(sample.right_hand);
        self.head.push(sample.head);
    }

    pub fn get(&self, landmark: Landmark) -> &SignalBuffer {
        match landmark {
            Landmark::LeftHand => &self.left_hand,
            Landmark::RightHand => &self.right_hand,
            Landmark::Head => &self.head,
        }
    }

    pub fn clear(&mut self) {
        self.left_hand.clear();
        self.right_hand.clear();
        self.head.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let buffers = LandmarkBuffers::default();
        assert_eq!(buffers.get(Landmark::LeftHand).capacity(), 15);
        assert_eq!(buffers.get(Landmark::RightHand).capacity(), 15);
        assert_eq!(buffers.get(Landmark::Head).capacity(), 30);
    }

    #[test]
    fn test_push_carries_missing_landmarks() {
        let mut buffers = LandmarkBuffers::default();
        buffers.push(&PoseSample {
            left_hand: Some(Point2D::new(10.0, 20.0)),
            right_hand: None,
            head: Some(Point2D::new(300.0, 100.0)),
        });
        buffers.push(&PoseSample::EMPTY);

        assert_eq!(buffers.left_hand.window(), vec![Point2D::new(10.0, 20.0); 2]);
        assert_eq!(buffers.right_hand.window(), vec![Point2D::ORIGIN; 2]);
        assert_eq!(buffers.head.newest(), Some(Point2D::new(300.0, 100.0)));
    }

    #[test]
    fn test_pose_sample_json_skips_missing() {
        let sample = PoseSample { head: Some(Point2D::new(1.0, 2.0)), ..PoseSample::EMPTY };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"head":{"x":1.0,"y":2.0}}"#);

        let parsed: PoseSample = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }
}
