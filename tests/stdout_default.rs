use json_log_facade::{LogFacade, Logger, Severity};
use serde_json::Value;
use std::process::Command;

// Set when this test binary re-runs itself as the child process.
const CHILD_ENV: &str = "JSON_LOG_FACADE_STDOUT_CHILD";

#[test]
fn omitted_sink_writes_to_stdout() {
    if std::env::var_os(CHILD_ENV).is_some() {
        let logger = LogFacade::new("stdout-svc", Severity::Info, None);
        logger.debug(None, "suppressed", &[]);
        logger.info(None, "hello stdout", &[Value::from(42)]);
        return;
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["omitted_sink_writes_to_stdout", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(output.status.success(), "child failed: {output:?}");

    // The harness prints its own progress on the same stream, so pick the
    // JSON object out of the surrounding text.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<Value> = stdout
        .lines()
        .filter_map(|line| {
            let start = line.find('{')?;
            let end = line.rfind('}')?;
            serde_json::from_str(&line[start..=end]).ok()
        })
        .collect();

    assert_eq!(records.len(), 1, "stdout was: {stdout}");
    assert_eq!(records[0]["service"], "stdout-svc");
    assert_eq!(records[0]["msg"], "hello stdout");
    assert_eq!(records[0]["data"], serde_json::json!([42]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("hello stdout"));
}
