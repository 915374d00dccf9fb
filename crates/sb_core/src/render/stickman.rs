//! Stick figure geometry
//!
//! Pure function of fighter state; no state of its own.

use super::primitives::{DrawCommand, Rgb};
use crate::config::{ChannelLayout, CombatConfig};
use crate::engine::{Arm, Fighter};
use crate::geometry::Point2D;

pub const BODY_LENGTH: f32 = 60.0;
pub const THIGH_LENGTH: f32 = 30.0;
pub const CALF_LENGTH: f32 = 30.0;
pub const BASE_BEND: f32 = 10.0;
pub const STRIDE_AMPLITUDE: f32 = 10.0;
pub const FIST_RADIUS: f32 = 8.0;
pub const STROKE: f32 = 3.0;

const REAR_ARM_DROP: f32 = 10.0;
const REAR_FIST_RADIUS: f32 = 5.0;

/// Head, body, arms with fists, two-segment legs.
pub fn draw_fighter(fighter: &Fighter, combat: &CombatConfig) -> Vec<DrawCommand> {
    let color = fighter.color();
    let head = Point2D::new(fighter.x, fighter.y);
    let head_radius = combat.head_radius * fighter.head_scale();
    let joint_y = head.y + head_radius + combat.arm_joint_offset;
    let hip = Point2D::new(head.x, head.y + BODY_LENGTH);

    let mut cmds = Vec::with_capacity(11);
    cmds.push(DrawCommand::circle(head, head_radius, color));
    cmds.push(DrawCommand::line(Point2D::new(head.x, head.y + head_radius), hip, STROKE, color));

    let shoulder = Point2D::new(head.x, joint_y);
    match fighter.layout() {
        ChannelLayout::Dual => {
            for arm in [Arm::Right, Arm::Left] {
                push_arm(&mut cmds, fighter, arm, shoulder, color);
            }
        }
        ChannelLayout::Single => {
            let lead = fighter.lead_arm();
            push_arm(&mut cmds, fighter, lead, shoulder, color);

            let rear = lead.other();
            let length = fighter.config().rest_arm_length / 2.0;
            let fist = Point2D::new(head.x + rear.direction() * length, joint_y + REAR_ARM_DROP);
            cmds.push(DrawCommand::line(shoulder, fist, STROKE, color));
            cmds.push(DrawCommand::circle(fist, REAR_FIST_RADIUS, color));
        }
    }

    let stride = if fighter.is_moving() && !fighter.is_jumping() {
        fighter.animation_frame().sin() * STRIDE_AMPLITUDE
    } else {
        0.0
    };
    let bend = BASE_BEND + tuck(fighter);

    for (dir, swing) in [(-1.0, stride), (1.0, -stride)] {
        let knee = Point2D::new(hip.x + dir * bend + swing, hip.y + THIGH_LENGTH);
        let foot = Point2D::new(knee.x, knee.y + CALF_LENGTH);
        cmds.push(DrawCommand::line(hip, knee, STROKE, color));
        cmds.push(DrawCommand::line(knee, foot, STROKE, color));
    }

    cmds
}

/// Extra knee bend while airborne
fn tuck(fighter: &Fighter) -> f32 {
    if fighter.is_jumping() {
        fighter.jump_velocity().abs().clamp(5.0, 20.0)
    } else {
        0.0
    }
}

fn push_arm(
    cmds: &mut Vec<DrawCommand>,
    fighter: &Fighter,
    arm: Arm,
    shoulder: Point2D,
    color: Rgb,
) {
    let channel = fighter.channel(arm);
    let fist = Point2D::new(shoulder.x + arm.direction() * channel.arm_length, shoulder.y);
    let radius = if channel.active { FIST_RADIUS * channel.punch_scale } else { FIST_RADIUS };
    cmds.push(DrawCommand::line(shoulder, fist, STROKE, color));
    cmds.push(DrawCommand::circle(fist, radius, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FighterConfig, SceneConfig};
    use crate::engine::{ActionRequest, Side};

    fn fighter(layout: ChannelLayout) -> Fighter {
        let cfg = FighterConfig { channels: layout, ..FighterConfig::default() };
        Fighter::new(Side::One, 200.0, 450.0, Rgb::RED, false, cfg)
    }

    fn circles(cmds: &[DrawCommand]) -> Vec<(Point2D, f32)> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rest_pose() {
        let f = fighter(ChannelLayout::Dual);
        let cmds = draw_fighter(&f, &CombatConfig::default());
        assert_eq!(cmds.len(), 10);

        let c = circles(&cmds);
        assert_eq!(c[0], (Point2D::new(200.0, 450.0), 15.0));
        assert_eq!(c[1], (Point2D::new(240.0, 480.0), 8.0));
        assert_eq!(c[2], (Point2D::new(160.0, 480.0), 8.0));

        // left leg: hip (200,510) -> knee (190,540) -> foot (190,570)
        assert!(cmds.contains(&DrawCommand::line(
            Point2D::new(190.0, 540.0),
            Point2D::new(190.0, 570.0),
            STROKE,
            Rgb::RED
        )));
    }

    #[test]
    fn test_punching_fist_grows() {
        let mut f = fighter(ChannelLayout::Dual);
        f.attack_right();
        for _ in 0..10 {
            f.update(300.0, 450.0);
        }
        let c = circles(&draw_fighter(&f, &CombatConfig::default()));
        let (center, radius) = c[1];
        assert!((center.x - 300.0).abs() < 1e-3);
        assert!((radius - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_guard_grows_head_and_lowers_arms() {
        let mut f = fighter(ChannelLayout::Dual);
        f.defend();
        for _ in 0..10 {
            f.update(600.0, 450.0);
        }
        let c = circles(&draw_fighter(&f, &CombatConfig::default()));
        assert!((c[0].1 - 45.0).abs() < 1e-4);
        assert!((c[1].0.y - 510.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_layout_rear_arm() {
        let f = fighter(ChannelLayout::Single);
        let c = circles(&draw_fighter(&f, &CombatConfig::default()));
        assert_eq!(c[1], (Point2D::new(240.0, 480.0), 8.0));
        assert_eq!(c[2], (Point2D::new(180.0, 490.0), REAR_FIST_RADIUS));
    }

    #[test]
    fn test_legs_tuck_while_airborne() {
        let scene = SceneConfig::default();
        let mut f = fighter(ChannelLayout::Dual);
        f.tick(600.0, &ActionRequest { jump: true, ..ActionRequest::NONE }, &scene);
        f.update(600.0, scene.ground_y);

        // velocity 14.2 after one tick of gravity
        let cmds = draw_fighter(&f, &CombatConfig::default());
        let hip = Point2D::new(200.0, f.y + BODY_LENGTH);
        let knee = Point2D::new(200.0 - (BASE_BEND + 14.2), hip.y + THIGH_LENGTH);
        let found = cmds.iter().any(|c| match c {
            DrawCommand::Line { from, to, .. } => *from == hip && (to.x - knee.x).abs() < 1e-3,
            _ => false,
        });
        assert!(found);
    }

    /// Knee x of every segment starting at the hip, left leg first
    fn knees(cmds: &[DrawCommand], hip: Point2D) -> Vec<f32> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } if *from == hip && to.y > hip.y => Some(to.x),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_legs_swing_while_walking() {
        let scene = SceneConfig::default();
        let mut f = fighter(ChannelLayout::Dual);
        let walk = ActionRequest { move_right: true, ..ActionRequest::NONE };
        for _ in 0..3 {
            f.tick(600.0, &walk, &scene);
        }
        assert!(f.is_moving());

        let swing = f.animation_frame().sin() * STRIDE_AMPLITUDE;
        assert!(swing.abs() > 1.0);
        let hip = Point2D::new(f.x, f.y + BODY_LENGTH);
        let k = knees(&draw_fighter(&f, &CombatConfig::default()), hip);
        assert_eq!(k.len(), 2);
        assert!((k[0] - (hip.x - BASE_BEND + swing)).abs() < 1e-3);
        assert!((k[1] - (hip.x + BASE_BEND - swing)).abs() < 1e-3);
    }

    #[test]
    fn test_no_stride_while_airborne() {
        let scene = SceneConfig::default();
        let mut f = fighter(ChannelLayout::Dual);
        let hop = ActionRequest { move_right: true, jump: true, ..ActionRequest::NONE };
        f.tick(600.0, &hop, &scene);
        assert!(f.is_moving() && f.is_jumping());
        assert!(f.animation_frame().sin().abs() > 0.1);

        // jump velocity 15 => tuck 15, no sine offset
        let hip = Point2D::new(f.x, f.y + BODY_LENGTH);
        let k = knees(&draw_fighter(&f, &CombatConfig::default()), hip);
        assert_eq!(k.len(), 2);
        assert!((k[0] - (hip.x - BASE_BEND - 15.0)).abs() < 1e-3);
        assert!((k[1] - (hip.x + BASE_BEND + 15.0)).abs() < 1e-3);
    }
}
