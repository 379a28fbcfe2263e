use crux_core::{render::render, Command};

use crate::events::{DeviceEvent, Event};
use crate::model::Model;
use crate::types::{FirmwareVersion, RESTART_ENDPOINT, VERSION_ENDPOINT};
use crate::{http_get, http_post, Effect};

/// Handle device action events (restart, firmware version)
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::Restart => {
            // the control is disabled while restarting, a second click must not
            // reach the device
            if model.is_restarting {
                log::debug!("restart already in progress, ignoring");
                return Command::done();
            }
            let generation = model.start_restart();
            Command::all([
                render(),
                http_post!(Device, DeviceEvent, RESTART_ENDPOINT, RestartResponse, "Restart",
                    generation: generation
                ),
            ])
        }

        DeviceEvent::RestartResponse { generation, result } => {
            if !model.is_pending_restart(generation) {
                log::debug!("discarding stale restart response #{generation}: {result:?}");
                return Command::done();
            }
            model.finish_restart(result);
            render()
        }

        DeviceEvent::LoadVersion => load_version(),

        DeviceEvent::VersionResponse(result) => match result {
            Ok(version) => {
                log::info!("device firmware: {}", version.summary());
                model.firmware = Some(version);
                render()
            }
            Err(e) => {
                log::warn!("could not load firmware version: {e}");
                Command::done()
            }
        },
    }
}

/// Fetch firmware build information from the device
pub fn load_version() -> Command<Effect, Event> {
    http_get!(
        Device,
        DeviceEvent,
        VERSION_ENDPOINT,
        VersionResponse,
        "Load version",
        FirmwareVersion
    )
}
