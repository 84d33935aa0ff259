mod combat;
mod core;
mod movement;
mod ui;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::world::WORLD_GRAVITY;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rexrun".to_string(),
                resolution: (1024, 600).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
        .add_plugins((
            core::CorePlugin,
            world::WorldPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            ui::UiPlugin,
        ))
        .run();
}
