//! Contact-limited movement against a point solidity oracle
//!
//! Movement is marched in `resolution`-sized steps along a direction instead
//! of solving exact line/shape intersections. A body is tested by sampling the
//! four corners of its bounding box (far edges inset by one unit).
//!
//! Sample distances are `0, r, 2r, ...` with `max_distance` itself as the
//! final sample, so a free path always ends exactly at `max_distance`.

use crate::core::{Angle, EngineError, EngineResult};
use crate::domain::Body;

/// Upper bound on samples per march. Longer marches widen their step so the
/// last sample still lands on `max_distance`.
pub const MAX_MARCH_SAMPLES: u32 = 1 << 16;

/// Answers whether a world point is impassable.
///
/// Out-of-range points follow the implementor's convention; the engine
/// imposes none.
pub trait SolidityOracle {
    fn is_solid_at(&self, x: f32, y: f32) -> bool;
}

impl<F> SolidityOracle for F
where
    F: Fn(f32, f32) -> bool,
{
    fn is_solid_at(&self, x: f32, y: f32) -> bool {
        self(x, y)
    }
}

/// Oracle for an empty world.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSolids;

impl SolidityOracle for NoSolids {
    fn is_solid_at(&self, _x: f32, _y: f32) -> bool {
        false
    }
}

/// Marching step length. Always finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Resolution(f32);

impl Resolution {
    /// One world unit
    pub const DEFAULT: Resolution = Resolution(1.0);

    pub fn new(step: f32) -> EngineResult<Self> {
        if step.is_finite() && step > 0.0 {
            Ok(Self(step))
        } else {
            Err(EngineError::InvalidResolution(step))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Resolution {
    type Error = EngineError;

    fn try_from(step: f32) -> EngineResult<Self> {
        Self::new(step)
    }
}

/// True iff none of the four box corners at `(x, y)` is solid.
/// A body without a bounding box is always free.
pub fn is_point_free<O>(body: &Body, oracle: &O, x: f32, y: f32) -> bool
where
    O: SolidityOracle + ?Sized,
{
    match body.bounding_box {
        None => true,
        Some(bbox) => bbox
            .corners_at(x, y)
            .iter()
            .all(|&(cx, cy)| !oracle.is_solid_at(cx, cy)),
    }
}

fn sample_distances(max_distance: f32, resolution: Resolution) -> impl Iterator<Item = f32> {
    let mut step = resolution.get();
    let mut steps = (max_distance / step).ceil();
    if steps > MAX_MARCH_SAMPLES as f32 {
        steps = MAX_MARCH_SAMPLES as f32;
        step = max_distance / steps;
    }
    let steps = steps as u32;
    (0..=steps).map(move |k| if k == steps { max_distance } else { (k as f32 * step).min(max_distance) })
}

/// Unit vector of `direction` in y-down world space
#[inline]
fn unit(direction: Angle) -> (f32, f32) {
    (direction.cos(), -direction.sin())
}

/// Unit vector and length of a displacement. Same direction as
/// `atan2(-dy, dx)`, without the trig round trip that would leak a tiny
/// sideways drift into axis-aligned moves.
#[inline]
fn split_vector(dx: f32, dy: f32) -> ((f32, f32), f32) {
    let length = dx.hypot(dy);
    if length > 0.0 {
        ((dx / length, dy / length), length)
    } else {
        ((1.0, 0.0), length)
    }
}

#[inline]
fn is_degenerate(max_distance: f32) -> bool {
    !(max_distance.is_finite() && max_distance > 0.0)
}

fn march_to_contact<O>(body: &mut Body, oracle: &O, (ux, uy): (f32, f32), max_distance: f32, resolution: Resolution) -> bool
where
    O: SolidityOracle + ?Sized,
{
    if is_degenerate(max_distance) {
        return false;
    }

    let (x0, y0) = (body.x, body.y);
    let mut reached = 0.0;
    for distance in sample_distances(max_distance, resolution) {
        if !is_point_free(body, oracle, x0 + ux * distance, y0 + uy * distance) {
            break;
        }
        reached = distance;
    }

    body.x = x0 + ux * reached;
    body.y = y0 + uy * reached;
    reached > 0.0
}

fn march_to_free<O>(body: &mut Body, oracle: &O, (ux, uy): (f32, f32), max_distance: f32, resolution: Resolution) -> bool
where
    O: SolidityOracle + ?Sized,
{
    if is_degenerate(max_distance) {
        return false;
    }

    let (x0, y0) = (body.x, body.y);
    let reached = sample_distances(max_distance, resolution)
        .find(|&distance| is_point_free(body, oracle, x0 + ux * distance, y0 + uy * distance))
        .unwrap_or(max_distance);

    body.x = x0 + ux * reached;
    body.y = y0 + uy * reached;
    reached > 0.0
}

/// Advance toward `direction` until the next sample would be blocked.
///
/// The body ends on the last free sample: it stays put if even the start is
/// blocked and travels the full `max_distance` if nothing is in the way.
/// Returns whether it moved.
pub fn move_contact_solid<O>(
    body: &mut Body,
    oracle: &O,
    direction: Angle,
    max_distance: f32,
    resolution: Resolution,
) -> bool
where
    O: SolidityOracle + ?Sized,
{
    march_to_contact(body, oracle, unit(direction), max_distance, resolution)
}

/// Vector form: direction `atan2(-dy, dx)`, distance `|(dx, dy)|`.
pub fn move_contact_solid_by<O>(
    body: &mut Body,
    oracle: &O,
    dx: f32,
    dy: f32,
    resolution: Resolution,
) -> bool
where
    O: SolidityOracle + ?Sized,
{
    let (unit, length) = split_vector(dx, dy);
    march_to_contact(body, oracle, unit, length, resolution)
}

/// Advance toward `direction` until the first free sample.
///
/// The body stays put if it already is free and ends at `max_distance` if no
/// sample along the way is free. Returns whether it moved.
pub fn move_outside_solid<O>(
    body: &mut Body,
    oracle: &O,
    direction: Angle,
    max_distance: f32,
    resolution: Resolution,
) -> bool
where
    O: SolidityOracle + ?Sized,
{
    march_to_free(body, oracle, unit(direction), max_distance, resolution)
}

/// Vector form of [`move_outside_solid`].
pub fn move_outside_solid_by<O>(
    body: &mut Body,
    oracle: &O,
    dx: f32,
    dy: f32,
    resolution: Resolution,
) -> bool
where
    O: SolidityOracle + ?Sized,
{
    let (unit, length) = split_vector(dx, dy);
    march_to_free(body, oracle, unit, length, resolution)
}
