use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state of the restart control
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Restart state
    /// Set when the restart request is issued. Cleared on failure only,
    /// the device is expected to drop off the network after a successful one.
    pub is_restarting: bool,
    pub status_message: Option<String>,
    /// Identifies the restart request in flight. Never rewinds, so a response
    /// to a request issued before an unmount can't settle a newer one.
    pub restart_generation: u32,

    // Device state
    pub firmware: Option<FirmwareVersion>,
}

impl Model {
    /// Enter the restarting state, returns the generation of the new request
    pub fn start_restart(&mut self) -> u32 {
        self.restart_generation = self.restart_generation.wrapping_add(1);
        self.is_restarting = true;
        self.status_message = Some(RESTARTING_MESSAGE.to_string());
        self.restart_generation
    }

    /// True if a response tagged with `generation` settles the pending request
    pub fn is_pending_restart(&self, generation: u32) -> bool {
        self.is_restarting && self.restart_generation == generation
    }

    /// Settle a restart request
    pub fn finish_restart(&mut self, result: Result<(), DeviceError>) {
        match result {
            Ok(()) => {
                self.status_message = Some(RESTART_ACCEPTED_MESSAGE.to_string());
            }
            Err(e) => {
                self.is_restarting = false;
                self.status_message = Some(e.restart_message().to_string());
            }
        }
    }

    /// Back to the state of a freshly mounted component
    pub fn reset(&mut self) {
        let generation = self.restart_generation.wrapping_add(1);
        *self = Self {
            restart_generation: generation,
            ..Self::default()
        };
    }

    pub fn has_status(&self) -> bool {
        self.status_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_allows_retry() {
        let mut model = Model::default();
        let _generation = model.start_restart();
        model.finish_restart(Err(DeviceError::Transport("timeout".to_string())));

        assert!(!model.is_restarting);
        assert_eq!(
            model.status_message.as_deref(),
            Some(COMMUNICATION_ERROR_MESSAGE)
        );
    }

    #[test]
    fn empty_message_is_no_status() {
        let model = Model {
            status_message: Some(String::new()),
            ..Default::default()
        };
        assert!(!model.has_status());
    }

    #[test]
    fn reset_drops_firmware_info() {
        let mut model = Model {
            is_restarting: true,
            status_message: Some(RESTARTING_MESSAGE.to_string()),
            restart_generation: 3,
            firmware: Some(FirmwareVersion::default()),
        };
        model.reset();
        assert!(!model.is_restarting);
        assert_eq!(model.status_message, None);
        assert_eq!(model.firmware, None);
        assert!(model.restart_generation > 3);
    }

    #[test]
    fn restart_started_before_reset_is_not_pending() {
        let mut model = Model::default();
        let stale = model.start_restart();
        model.reset();
        let current = model.start_restart();

        assert_ne!(stale, current);
        assert!(!model.is_pending_restart(stale));
        assert!(model.is_pending_restart(current));
    }
}
