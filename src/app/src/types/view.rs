use serde::{Deserialize, Serialize};

use super::FirmwareVersion;

pub const UPDATE_SECTION_TITLE: &str = "Firmware Update";
pub const DEVICE_CONTROL_TITLE: &str = "Device Control";
pub const DEVICE_CONTROL_HINT: &str =
    "Restart the device to apply firmware changes or troubleshoot issues.";
pub const RESTART_LABEL: &str = "Restart Device";
pub const RESTARTING_LABEL: &str = "Restarting...";

/// Visual emphasis of the status banner
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
}

/// Status message region, only present when there is something to say
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBanner {
    pub text: String,
    pub severity: Severity,
}

/// Restart action control
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestartButton {
    pub label: String,
    pub spinner: bool,
    pub disabled: bool,
}

/// Everything the shell needs to draw the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub update_title: String,
    pub update_frame_src: String,
    pub firmware: Option<FirmwareVersion>,
    pub control_title: String,
    pub control_hint: String,
    pub status: Option<StatusBanner>,
    pub restart_button: RestartButton,
}
