/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.status_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_restarting, false;
///     model.status_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        $crate::update_field!($model_field, $value;)
    }};
}

/// Macro for bodiless POST requests whose outcome is the status only.
/// The response event is tagged with the request generation so stale
/// responses can be told apart.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// http_post!(Device, DeviceEvent, RESTART_ENDPOINT, RestartResponse, "Restart",
///     generation: generation
/// )
/// ```
#[macro_export]
macro_rules! http_post {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, generation: $generation:expr) => {{
        let generation: u32 = $generation;
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .build()
            .then_send(move |result| {
                let result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    generation,
                    result,
                })
            })
    }};
}

/// Macro for GET requests expecting a JSON body.
///
/// # Example
/// ```ignore
/// http_get!(Device, DeviceEvent, VERSION_ENDPOINT, VersionResponse, "Load version", FirmwareVersion)
/// ```
#[macro_export]
macro_rules! http_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, $response_type:ty) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, $crate::types::DeviceError> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}
