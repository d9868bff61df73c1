use templatist::config::Config;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert!(config.ui.mouse_enabled);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [logging]
        enabled = true
        "#,
    )
    .unwrap();

    assert!(config.logging.enabled);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.date_format, "%Y-%m-%d");
}

#[test]
fn form_height_out_of_range_is_rejected() {
    let config: Config = toml::from_str(
        r#"
        [ui]
        form_height = 40
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn generated_default_config_loads_back_unchanged() {
    let dir = std::env::temp_dir().join(format!("templatist-config-{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.ui.form_height, Config::default().ui.form_height);
    assert_eq!(loaded.display.date_format, Config::default().display.date_format);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_date_format_is_rejected() {
    let config: Config = toml::from_str(
        r#"
        [display]
        date_format = "%Q"
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
