//! Movement domain: ability notifications for cosmetic consumers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DashStartedEvent {
    pub player: Entity,
    pub direction: f32,
}

impl Message for DashStartedEvent {}

#[derive(Debug)]
pub struct DashEndedEvent {
    pub player: Entity,
}

impl Message for DashEndedEvent {}
