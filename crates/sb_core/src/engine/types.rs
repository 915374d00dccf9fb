use serde::{Deserialize, Serialize};

/// Which of the two fighters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub fn index(&self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Attack channel / arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    /// Screen x direction the arm extends toward
    pub fn direction(&self) -> f32 {
        match self {
            Arm::Left => -1.0,
            Arm::Right => 1.0,
        }
    }

    pub fn other(&self) -> Arm {
        match self {
            Arm::Left => Arm::Right,
            Arm::Right => Arm::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::One.index(), 0);
        assert_eq!(Side::Two.index(), 1);
        assert_eq!(Side::One.opponent(), Side::Two);
    }

    #[test]
    fn test_arm_direction() {
        assert_eq!(Arm::Left.direction(), -1.0);
        assert_eq!(Arm::Right.direction(), 1.0);
        assert_eq!(Arm::Left.other(), Arm::Right);
    }
}
