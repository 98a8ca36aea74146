// SPDX-License-Identifier: MPL-2.0
use image_display::application::port::CrossOrigin;
use image_display::config::{self, Config};
use image_display::controller::{connect, ImageLoadController, Message};
use image_display::domain::error::LoadError;
use image_display::domain::load::{LoadPhase, LoadState};
use image_display::domain::style::{hex_to_rgba, OpacityPercent};
use image_display::host::{MessageBus, RecordingSurface, ScriptEvent};
use image_display::settings::SettingsPatch;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

fn wired(config: &Config) -> (Rc<RefCell<ImageLoadController<RecordingSurface>>>, MessageBus) {
    let controller = Rc::new(RefCell::new(ImageLoadController::new(
        RecordingSurface::default(),
        config,
    )));
    let mut bus = MessageBus::new();
    connect(&mut bus, &controller);
    (controller, bus)
}

fn active_source(controller: &Rc<RefCell<ImageLoadController<RecordingSurface>>>) -> String {
    controller
        .borrow()
        .active_source()
        .expect("a request should be outstanding")
        .to_string()
}

#[test]
fn host_update_then_direct_failure_then_proxy_success() {
    let (controller, mut bus) = wired(&Config::default());

    bus.dispatch_json(
        r##"{"type":"SETTINGS_UPDATE","settings":{
            "imageUrl":"https://images.test/photo.jpg",
            "borderRadius":10,
            "shadowBlur":12,
            "shadowColor":"#FFF",
            "shadowOpacity":50
        }}"##,
    )
    .expect("valid host message");

    let direct = active_source(&controller);
    assert_eq!(direct, "https://images.test/photo.jpg");
    controller.borrow_mut().on_load_failed(&direct);

    let proxied = active_source(&controller);
    assert_eq!(
        proxied,
        "https://corsproxy.io/?https%3A%2F%2Fimages.test%2Fphoto.jpg"
    );
    controller.borrow_mut().on_load_succeeded(&proxied);

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::LoadedViaProxy);
    let surface = controller.surface();
    assert_eq!(surface.sources().len(), 2);
    let visibility = surface.last_visibility().expect("visibility applied");
    assert!(visibility.image_revealed && !visibility.spinner && visibility.error.is_none());

    let presentation = surface.last_presentation().expect("styled");
    assert_eq!(presentation.corner_radius.value(), 10);
    let shadow = presentation.shadow.expect("shadow configured");
    assert_eq!(shadow.color, hex_to_rgba("#FFF", OpacityPercent::new(50)));
    assert!(presentation
        .inline_style()
        .contains("box-shadow: 0 4px 12px rgba(255, 255, 255, 0.5);"));
}

#[test]
fn both_attempts_failing_shows_terminal_error() {
    let (controller, mut bus) = wired(&Config::default());
    bus.publish(&SettingsPatch::with_image_url("https://blocked.test/x.png"));

    for _ in 0..2 {
        let source = active_source(&controller);
        controller.borrow_mut().on_load_failed(&source);
    }

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::Failed(LoadError::ProxyLoadFailed));
    assert_eq!(controller.active_source(), None);
    let visibility = controller.surface().last_visibility().expect("visibility");
    assert!(!visibility.spinner);
    assert_eq!(
        visibility.error.as_deref(),
        Some(LoadError::ProxyLoadFailed.user_message())
    );
}

#[test]
fn non_settings_messages_do_not_touch_the_widget() {
    let (controller, mut bus) = wired(&Config::default());

    assert!(!bus.dispatch_json(r#"{"type":"THEME_CHANGED","theme":"dark"}"#).unwrap());
    assert!(bus.dispatch_json("not json").is_err());

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::Idle);
    assert!(controller.surface().calls().is_empty());
}

#[test]
fn config_file_drives_initial_settings_and_policy() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.proxy.base_url = "https://relay.test/?target=".into();
    config.load.direct_cross_origin = CrossOrigin::Anonymous;
    config.defaults = SettingsPatch {
        image_url: Some("https://images.test/start.png".into()),
        alt_text: Some("Start".into()),
        ..SettingsPatch::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut controller = ImageLoadController::new(RecordingSurface::default(), &loaded);
    assert_eq!(controller.settings().alt_text, "Start");
    controller.load_image();
    assert_eq!(
        controller.surface().last_cross_origin(),
        Some(CrossOrigin::Anonymous)
    );
    controller.on_load_failed("https://images.test/start.png");
    assert_eq!(
        controller.surface().current_source(),
        Some("https://relay.test/?target=https%3A%2F%2Fimages.test%2Fstart.png")
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn scripted_session_replays_like_a_host() {
    let script = r#"
        # initial image
        {"type":"SETTINGS_UPDATE","settings":{"imageUrl":"https://images.test/a.png"}}
        {"type":"SETTINGS_UPDATE","settings":{"imageUrl":"https://images.test/b.png"}}
        {"type":"LOAD_OK","source":"https://images.test/a.png"}
        {"type":"LOAD_ERROR"}
        {"type":"LOAD_OK"}
    "#;

    let mut controller = ImageLoadController::new(RecordingSurface::default(), &Config::default());
    for line in script.lines() {
        let Some(event) = ScriptEvent::parse_line(line).expect("valid script") else {
            continue;
        };
        if let Some(message) = event.into_message(controller.active_source()) {
            controller.handle(message);
        }
    }

    assert_eq!(controller.state(), LoadState::LoadedViaProxy);
    assert_eq!(
        controller.surface().sources(),
        vec![
            "https://images.test/a.png",
            "https://images.test/b.png",
            "https://corsproxy.io/?https%3A%2F%2Fimages.test%2Fb.png",
        ]
    );
}

#[test]
fn empty_url_from_host_never_hits_the_network() {
    let (controller, mut bus) = wired(&Config::default());
    bus.dispatch_json(r#"{"type":"SETTINGS_UPDATE","settings":{"imageUrl":""}}"#)
        .expect("valid");

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::Failed(LoadError::EmptyUrl));
    assert!(controller.surface().sources().is_empty());
    assert_eq!(
        controller
            .surface()
            .last_visibility()
            .and_then(|v| v.error.clone()),
        Some("No image URL provided".to_string())
    );
}

#[test]
fn reload_message_retries_a_failed_url() {
    let mut controller = ImageLoadController::new(RecordingSurface::default(), &Config::default());
    controller.handle(Message::Reload);
    let direct = controller.active_source().expect("outstanding").to_string();
    controller.handle(Message::LoadFailed { source: direct });
    let proxied = controller.active_source().expect("outstanding").to_string();
    controller.handle(Message::LoadFailed { source: proxied });
    assert!(controller.state().is_failed());

    controller.handle(Message::Reload);
    assert_eq!(controller.state(), LoadState::Loading(LoadPhase::Direct));
}
