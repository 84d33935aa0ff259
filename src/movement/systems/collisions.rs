//! Movement domain: grounded detection via the physics substrate.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

/// Probe below the player's feet and record the supporting surface. The
/// landing transition is the only event that restores the jump budget.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 18.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_ray_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();
        state.ground_entity = hit.map(|h| h.entity);

        if state.on_ground && !was_on_ground {
            state.land(tuning.max_jumps);
            debug!("Landed: jump budget restored to {}", state.jumps_remaining);
        }
    }
}
