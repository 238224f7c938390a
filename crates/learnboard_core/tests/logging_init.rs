use learnboard_core::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let config = LogConfig {
        level: LogLevel::Info,
        log_dir: first_dir.path().join("logs"),
    };

    init_logging(&config).unwrap();
    init_logging(&config).unwrap();
    assert!(config.log_dir.is_dir());

    let level_conflict = LogConfig {
        level: LogLevel::Debug,
        ..config.clone()
    };
    let err = init_logging(&level_conflict).unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized { .. }));
    assert!(err.to_string().contains("refusing to switch"));

    let dir_conflict = LogConfig {
        level: LogLevel::Info,
        log_dir: second_dir.path().to_path_buf(),
    };
    assert!(init_logging(&dir_conflict).is_err());

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, LogLevel::Info);
    assert_eq!(dir, config.log_dir);
}
