mod collisions;
mod input;
mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_dash, apply_horizontal_movement, apply_jump, update_dash_timers, update_facing,
};
