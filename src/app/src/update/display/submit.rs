use crux_core::Command;

use crate::events::{DisplayEvent, Event};
use crate::model::Model;
use crate::types::{Config, DisplayConfig, SubmitPolicy};
use crate::{DeviceCmd, Effect};

/// Success message for a saved display config; the device reboots to apply it
pub const DISPLAY_CONFIG_SAVED: &str = "Saved Display Config, Restarting Node";

/// Handle form submit - validate the draft and send it to the device
pub fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    let Some(config) = model.form.submission() else {
        log::debug!("Display form has errors: {:?}", model.form.errors);
        return crux_core::render::render();
    };

    let Some(connection_id) = model.connection_id else {
        log::debug!("No device connection, skipping display config submit");
        return crux_core::render::render();
    };

    if model.is_submitting() {
        match model.settings.submit_policy {
            SubmitPolicy::Block => {
                log::warn!("Display config submit ignored, a submission is in flight");
                return crux_core::render::render();
            }
            SubmitPolicy::Queue => {
                log::debug!("Display config submit queued");
                model.queued = Some(config);
                return crux_core::render::render();
            }
            SubmitPolicy::Allow => {}
        }
    }

    send_config(connection_id, config, model)
}

/// Handle the device's answer to a set-config request
pub fn handle_set_config_response(
    submitted: DisplayConfig,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.in_flight = model.in_flight.saturating_sub(1);

    match result {
        Ok(()) => {
            log::debug!("Display config saved: {submitted:?}");
            model.form.reset_to(&submitted);
            model.success_message = Some(DISPLAY_CONFIG_SAVED.to_string());
        }
        Err(e) => {
            log::error!("Failed to save display config: {e}");
            model.set_error(format!("Failed to save Display Config: {e}"));
        }
    }

    if model.is_submitting() {
        return crux_core::render::render();
    }

    match (model.queued.take(), model.connection_id) {
        (Some(next), Some(connection_id)) => {
            // keep showing the queued values while they are on their way
            model.form.form_data = (&next).into();
            send_config(connection_id, next, model)
        }
        (Some(_), None) => {
            log::debug!("Dropping queued display config, device disconnected");
            crux_core::render::render()
        }
        (None, _) => crux_core::render::render(),
    }
}

fn send_config(
    connection_id: u32,
    config: DisplayConfig,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.in_flight += 1;
    model.clear_messages();

    let submitted = config.clone();
    let config = Config::display(config);
    log::debug!(
        "Sending {} config to connection {connection_id}",
        config.kind()
    );
    Command::all([
        crux_core::render::render(),
        DeviceCmd::set_config(connection_id, config)
            .build()
            .then_send(move |output| {
                Event::Display(DisplayEvent::SetConfigResponse {
                    submitted,
                    result: output.into(),
                })
            }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::device::{DeviceOperation, DeviceOutput};
    use crate::types::{
        DisplayField, DisplayUnits, FieldValue, FormSettings, GpsCoordinateFormat, PayloadVariant,
    };

    fn upstream() -> DisplayConfig {
        DisplayConfig {
            screen_on_secs: 60,
            auto_screen_carousel_secs: 10,
            gps_format: GpsCoordinateFormat::Utm,
            compass_north_top: false,
            flip_screen: false,
            units: DisplayUnits::Metric,
        }
    }

    fn connected_model(policy: SubmitPolicy) -> Model {
        let mut model = Model {
            connection_id: Some(9),
            settings: FormSettings {
                submit_policy: policy,
            },
            ..Default::default()
        };
        model.sync_upstream(upstream());
        model
    }

    fn edit(model: &mut Model, field: DisplayField, value: &str) {
        model
            .form
            .edit(field, FieldValue::Text(value.to_string()))
            .unwrap();
    }

    fn set_config_requests(
        cmd: &mut Command<Effect, Event>,
    ) -> Vec<crux_core::Request<DeviceOperation>> {
        cmd.effects()
            .filter_map(|effect| match effect {
                Effect::Device(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    mod submit {
        use super::*;

        #[test]
        fn sends_display_payload_with_exact_values() {
            let mut model = connected_model(SubmitPolicy::Block);
            edit(&mut model, DisplayField::GpsFormat, "0");
            edit(&mut model, DisplayField::Units, "1");
            edit(&mut model, DisplayField::ScreenOnSecs, "120");

            let mut cmd = handle_submit(&mut model);
            let requests = set_config_requests(&mut cmd);

            assert_eq!(requests.len(), 1);
            let DeviceOperation::SetConfig {
                connection_id,
                config,
            } = &requests[0].operation;
            assert_eq!(*connection_id, 9);
            assert_eq!(config.kind(), "display");
            let PayloadVariant::Display(display) = &config.payload_variant;
            assert_eq!(display.gps_format, GpsCoordinateFormat::Dec);
            assert_eq!(display.units, DisplayUnits::Imperial);
            assert_eq!(display.screen_on_secs, 120);
            assert!(model.is_submitting());
        }

        #[test]
        fn without_connection_is_a_silent_no_op() {
            let mut model = connected_model(SubmitPolicy::Block);
            model.connection_id = None;
            edit(&mut model, DisplayField::ScreenOnSecs, "5");

            let mut cmd = handle_submit(&mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert!(!model.is_submitting());
            assert_eq!(model.error_message, None);
            assert!(model.is_dirty());
        }

        #[test]
        fn invalid_draft_blocks_submit_with_field_errors() {
            let mut model = connected_model(SubmitPolicy::Block);
            edit(&mut model, DisplayField::AutoScreenCarouselSecs, "fast");

            let mut cmd = handle_submit(&mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert!(!model.is_submitting());
            assert!(model.form.errors.contains_key("autoScreenCarouselSecs"));
            assert_eq!(model.form.errors.len(), 1);
        }

        #[test]
        fn clears_previous_messages() {
            let mut model = connected_model(SubmitPolicy::Block);
            model.success_message = Some(DISPLAY_CONFIG_SAVED.to_string());
            model.error_message = Some("old".to_string());

            let _ = handle_submit(&mut model);

            assert_eq!(model.success_message, None);
            assert_eq!(model.error_message, None);
        }
    }

    mod response {
        use super::*;

        #[test]
        fn completion_rebaselines_and_notifies() {
            let mut model = connected_model(SubmitPolicy::Block);
            edit(&mut model, DisplayField::ScreenOnSecs, "120");

            let mut cmd = handle_submit(&mut model);
            let mut request = set_config_requests(&mut cmd).remove(0);
            request.resolve(DeviceOutput::Completed).unwrap();
            let event = cmd.events().next().unwrap();

            let Event::Display(DisplayEvent::SetConfigResponse { submitted, result }) = event
            else {
                panic!("Expected SetConfigResponse");
            };
            assert_eq!(submitted.screen_on_secs, 120);
            assert_eq!(result, Ok(()));

            let _ = handle_set_config_response(submitted, result, &mut model);

            assert!(!model.is_submitting());
            assert!(!model.is_dirty());
            assert_eq!(model.form.form_data.screen_on_secs, Some(120));
            assert_eq!(model.success_message.as_deref(), Some(DISPLAY_CONFIG_SAVED));
            assert_eq!(model.upstream, upstream());
        }

        #[test]
        fn failure_keeps_draft_and_reports_error() {
            let mut model = connected_model(SubmitPolicy::Block);
            edit(&mut model, DisplayField::ScreenOnSecs, "45");
            let _ = handle_submit(&mut model);

            let submitted = DisplayConfig {
                screen_on_secs: 45,
                ..upstream()
            };
            let _ = handle_set_config_response(
                submitted,
                Err("Timed out waiting for device".to_string()),
                &mut model,
            );

            assert!(!model.is_submitting());
            assert!(model.is_dirty());
            assert_eq!(model.success_message, None);
            assert_eq!(
                model.error_message.as_deref(),
                Some("Failed to save Display Config: Timed out waiting for device")
            );
        }
    }

    mod resubmit_policy {
        use super::*;

        #[test]
        fn block_ignores_submit_while_in_flight() {
            let mut model = connected_model(SubmitPolicy::Block);
            let _ = handle_submit(&mut model);

            let mut cmd = handle_submit(&mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert_eq!(model.in_flight, 1);
            assert_eq!(model.queued, None);
        }

        #[test]
        fn allow_sends_again_and_stays_busy_until_all_complete() {
            let mut model = connected_model(SubmitPolicy::Allow);
            let _ = handle_submit(&mut model);

            let mut cmd = handle_submit(&mut model);

            assert_eq!(set_config_requests(&mut cmd).len(), 1);
            assert_eq!(model.in_flight, 2);

            let _ = handle_set_config_response(upstream(), Ok(()), &mut model);
            assert!(model.is_submitting());

            let _ = handle_set_config_response(upstream(), Ok(()), &mut model);
            assert!(!model.is_submitting());
        }

        #[test]
        fn queue_sends_latest_draft_after_completion() {
            let mut model = connected_model(SubmitPolicy::Queue);
            let _ = handle_submit(&mut model);

            edit(&mut model, DisplayField::ScreenOnSecs, "200");
            let _ = handle_submit(&mut model);
            edit(&mut model, DisplayField::ScreenOnSecs, "300");
            let mut cmd = handle_submit(&mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert_eq!(
                model.queued.as_ref().map(|c| c.screen_on_secs),
                Some(300)
            );

            let mut cmd = handle_set_config_response(upstream(), Ok(()), &mut model);
            let requests = set_config_requests(&mut cmd);

            assert_eq!(requests.len(), 1);
            let DeviceOperation::SetConfig { config, .. } = &requests[0].operation;
            let PayloadVariant::Display(display) = &config.payload_variant;
            assert_eq!(display.screen_on_secs, 300);
            assert_eq!(model.queued, None);
            assert!(model.is_submitting());
            assert_eq!(model.form.form_data.screen_on_secs, Some(300));
        }

        #[test]
        fn reset_discards_queued_config() {
            let mut model = connected_model(SubmitPolicy::Queue);
            let _ = handle_submit(&mut model);
            edit(&mut model, DisplayField::ScreenOnSecs, "999");
            let _ = handle_submit(&mut model);
            assert!(model.queued.is_some());

            let _ = crate::update::update(Event::Display(DisplayEvent::Reset), &mut model);
            let mut cmd = handle_set_config_response(upstream(), Ok(()), &mut model);

            assert_eq!(model.queued, None);
            assert!(set_config_requests(&mut cmd).is_empty());
            assert!(!model.is_submitting());
            assert_eq!(model.form.form_data.screen_on_secs, Some(60));
        }

        #[test]
        fn upstream_change_discards_queued_config() {
            let mut model = connected_model(SubmitPolicy::Queue);
            let _ = handle_submit(&mut model);
            edit(&mut model, DisplayField::ScreenOnSecs, "999");
            let _ = handle_submit(&mut model);

            let changed = DisplayConfig {
                screen_on_secs: 7,
                ..upstream()
            };
            let _ = crate::update::update(
                Event::Device(crate::events::DeviceEvent::ConfigUpdated(changed.clone())),
                &mut model,
            );
            let mut cmd = handle_set_config_response(upstream(), Ok(()), &mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert_eq!(model.queued, None);
            assert_eq!(model.upstream, changed);
            assert_ne!(model.form.form_data.screen_on_secs, Some(999));
        }

        #[test]
        fn queued_config_is_dropped_when_disconnected() {
            let mut model = connected_model(SubmitPolicy::Queue);
            let _ = handle_submit(&mut model);
            let _ = handle_submit(&mut model);
            model.connection_id = None;

            let mut cmd = handle_set_config_response(upstream(), Ok(()), &mut model);

            assert!(set_config_requests(&mut cmd).is_empty());
            assert_eq!(model.queued, None);
            assert!(!model.is_submitting());
        }
    }
}
