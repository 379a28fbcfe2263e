use std::fmt;

use serde::{Deserialize, Serialize};

/// Endpoint that asks the device to reboot
pub const RESTART_ENDPOINT: &str = "/restart";

/// Page served by the device's OTA handler, embedded as a frame
pub const UPDATE_PAGE_PATH: &str = "/update";

pub const RESTARTING_MESSAGE: &str = "Restarting device...";
pub const RESTART_ACCEPTED_MESSAGE: &str =
    "Device is restarting. Please wait 10-15 seconds then refresh this page.";
pub const RESTART_FAILED_MESSAGE: &str = "Failed to restart device. Please try again.";
pub const COMMUNICATION_ERROR_MESSAGE: &str = "Error: Could not communicate with device.";

/// Failure of a request to the device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceError {
    /// The device answered with a non-success status
    Http { status: u16 },
    /// The request did not complete (network, decoding, ...)
    Transport(String),
}

impl DeviceError {
    /// Message shown to the user when a restart fails this way
    pub fn restart_message(&self) -> &'static str {
        match self {
            Self::Http { .. } => RESTART_FAILED_MESSAGE,
            Self::Transport(_) => COMMUNICATION_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { status } => write!(f, "device responded with HTTP {status}"),
            Self::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}
