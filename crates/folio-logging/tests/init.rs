//! Subscriber installation and file output tests

use folio_logging::{FileConfig, FolioSubscriberBuilder, LogConfig, RotationStrategy, create_file_writer};

#[test]
fn test_never_rotation_creates_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = FileConfig {
        directory: dir.path().join("logs"),
        prefix: "splash".to_string(),
        rotation: RotationStrategy::Never,
    };

    let (_writer, _guard) = create_file_writer(&config).unwrap();

    assert!(dir.path().join("logs").join("splash.log").exists());
}

#[test]
fn test_rolling_rotation_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = FileConfig {
        directory: dir.path().join("nested").join("logs"),
        prefix: "folio".to_string(),
        rotation: RotationStrategy::Daily,
    };

    let (_writer, _guard) = create_file_writer(&config).unwrap();

    assert!(config.directory.is_dir());
}

#[test]
fn test_second_install_is_reported_not_panicking() {
    folio_logging::init_testing();
    folio_logging::init_testing();

    let second = FolioSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
    assert!(second.is_err());

    tracing::warn!(section = "projects", "logging still works after double init");
}
