use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

use super::device::load_version;

/// Handle UI lifecycle events (mount, unmount, clear status)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::Initialize => Command::all([render(), load_version()]),

        UiEvent::Unmount => {
            model.reset();
            render()
        }

        UiEvent::ClearStatus => {
            if model.is_restarting {
                return Command::done();
            }
            update_field!(model.status_message, None)
        }
    }
}
