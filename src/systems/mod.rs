//! Systems - collision marching and kinematic integration

pub mod collision;
pub mod kinematics;

pub use collision::{
    is_point_free, move_contact_solid, move_contact_solid_by, move_outside_solid,
    move_outside_solid_by, NoSolids, Resolution, SolidityOracle,
};
pub use kinematics::integrate;
