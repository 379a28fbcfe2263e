//! Rendering contract: the view model is a pure function of the model.

use crate::model::Model;
use crate::types::*;

pub fn view(model: &Model) -> ViewModel {
    ViewModel {
        update_title: UPDATE_SECTION_TITLE.to_string(),
        update_frame_src: UPDATE_PAGE_PATH.to_string(),
        firmware: model.firmware.clone(),
        control_title: DEVICE_CONTROL_TITLE.to_string(),
        control_hint: DEVICE_CONTROL_HINT.to_string(),
        status: status_banner(model),
        restart_button: restart_button(model.is_restarting),
    }
}

fn status_banner(model: &Model) -> Option<StatusBanner> {
    if !model.has_status() {
        return None;
    }
    let severity = if model.is_restarting {
        Severity::Info
    } else {
        Severity::Warning
    };
    model.status_message.as_ref().map(|text| StatusBanner {
        text: text.clone(),
        severity,
    })
}

fn restart_button(is_restarting: bool) -> RestartButton {
    let label = if is_restarting {
        RESTARTING_LABEL
    } else {
        RESTART_LABEL
    };
    RestartButton {
        label: label.to_string(),
        spinner: is_restarting,
        disabled: is_restarting,
    }
}
