//! UI domain: HUD readout and terminal overlays.

mod hud;
mod overlays;

pub use overlays::TerminalOverlay;

use bevy::prelude::*;

use crate::ui::hud::{spawn_hud, update_hud};
use crate::ui::overlays::{show_game_over, show_level_complete};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_hud, show_game_over, show_level_complete));
    }
}
