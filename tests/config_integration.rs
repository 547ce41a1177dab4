// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_banners::config::{self, BannerSection, Config};
use iced_banners::coordinator::Settings;
use iced_banners::domain::banner::{ExitType, Idiom, Position};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_built_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("banners.toml");

    let saved = Config {
        idiom: Some("tablet".to_string()),
        window_width: Some(1024.0),
        window_height: Some(768.0),
        banner: BannerSection {
            position: Some("bottom-left".to_string()),
            exit_type: Some("slide".to_string()),
            seconds_to_show: Some(2.5),
            ..BannerSection::default()
        },
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let settings = Settings::from_config(&loaded);

    assert_eq!(settings.idiom, Idiom::Tablet);
    assert_eq!(settings.window, Some(Size::new(1024.0, 768.0)));
    assert_eq!(settings.options.position(), Position::BottomLeft);
    assert_eq!(settings.options.exit_type(), ExitType::Slide);
    assert_eq!(
        settings.options.seconds_to_show(),
        Some(Duration::from_secs_f32(2.5))
    );
}

#[test]
fn hand_written_toml_is_accepted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("banners.toml");
    std::fs::write(
        &path,
        r#"
idiom = "phone"

[banner]
position = "Top-Right"
view_opacity = 0.8
allow_tap_to_dismiss = false
"#,
    )
    .expect("Failed to write config file");

    let options = config::load_from_path(&path)
        .expect("Failed to load config")
        .banner_options();
    assert_eq!(options.position(), Position::TopRight);
    assert!((options.view_opacity().value() - 0.8).abs() < f32::EPSILON);
    assert!(!options.allows_tap_to_dismiss());
}
