use serde::{Deserialize, Serialize};

use crate::types::*;

/// Device domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Restart,
    LoadVersion,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    RestartResponse {
        generation: u32,
        result: Result<(), DeviceError>,
    },
    #[serde(skip)]
    VersionResponse(Result<FirmwareVersion, DeviceError>),
}

/// UI lifecycle and housekeeping events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Component mounted
    Initialize,
    /// Component unmounted
    Unmount,
    ClearStatus,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Device(DeviceEvent),
    Ui(UiEvent),
}
