//! Per-step integration of an entity body

use crate::domain::Body;

use super::collision::{move_contact_solid_by, Resolution, SolidityOracle};

/// Runs after the entity's step hook: advance the animation, move by the
/// current velocity up to contact, then apply acceleration to velocity.
///
/// Acceleration lands after the move, so a velocity change made this step
/// shows up in position one step later.
pub fn integrate<O>(body: &mut Body, oracle: &O)
where
    O: SolidityOracle + ?Sized,
{
    body.advance_animation();

    let (dx, dy) = (body.h_speed, body.v_speed);
    move_contact_solid_by(body, oracle, dx, dy, Resolution::DEFAULT);

    body.h_speed += body.h_accel;
    body.v_speed += body.v_accel;
}
