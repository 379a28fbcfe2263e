use serde::{Deserialize, Serialize};

pub const VERSION_ENDPOINT: &str = "/version";

/// Firmware build information reported by the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub firmware_version: String,
    pub chip_family: String,
    #[serde(default)]
    pub build_date: String,
    #[serde(default)]
    pub build_time: String,
}

impl FirmwareVersion {
    /// Single line summary, e.g. "1.2.0 (ESP32-S3, built Jan 5 2025 10:00:00)"
    pub fn summary(&self) -> String {
        let built = format!("{} {}", self.build_date, self.build_time);
        let built = built.trim();
        if built.is_empty() {
            format!("{} ({})", self.firmware_version, self.chip_family)
        } else {
            format!(
                "{} ({}, built {built})",
                self.firmware_version, self.chip_family
            )
        }
    }
}
