//! Logging initialization against a scratch directory

use rollcall::config::LoggingConfig;
use rollcall::utils::logging;

#[test]
fn test_file_layer_writes_while_guard_is_held() {
    let dir = std::env::temp_dir().join(format!("rollcall-log-test-{}", std::process::id()));
    let config = LoggingConfig {
        level: "info".to_string(),
        file_path: dir.to_string_lossy().to_string(),
    };

    let guard = logging::init_logging(&config).unwrap();
    tracing::info!("file layer smoke record");
    // Dropping the guard flushes the non-blocking worker.
    drop(guard);

    let mut wrote_something = false;
    for entry in std::fs::read_dir(&dir).unwrap() {
        let entry = entry.unwrap();
        let content = std::fs::read_to_string(entry.path()).unwrap_or_default();
        if content.contains("file layer smoke record") {
            wrote_something = true;
        }
    }
    assert!(wrote_something);

    std::fs::remove_dir_all(&dir).ok();
}
