use json_log_facade::{Context, Fields, LogFacade, Logger, Severity, SharedBuffer};
use serde_json::{json, Value};

fn facade(service: &str, min_level: Severity) -> (LogFacade, SharedBuffer) {
    let buf = SharedBuffer::new();
    let logger = LogFacade::new(service, min_level, Some(Box::new(buf.clone())));
    (logger, buf)
}

fn records(buf: &SharedBuffer) -> Vec<Value> {
    buf.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("every line is a JSON object"))
        .collect()
}

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn warn_with_fields_matches_wire_format() {
    let (logger, buf) = facade("auth-svc", Severity::Info);
    logger.warn_with_fields(None, "token expired", &fields(json!({"user": "u1"})));

    let out = records(&buf);
    assert_eq!(out.len(), 1);
    let record = &out[0];
    assert_eq!(record["service"], "auth-svc");
    assert_eq!(record["level"], "WARN");
    assert_eq!(record["msg"], "token expired");
    assert_eq!(record["user"], "u1");
    assert!(record["time"].is_string());
}

#[test]
fn fields_are_top_level_not_nested() {
    let (logger, buf) = facade("svc", Severity::Debug);
    logger.info_with_fields(None, "m", &fields(json!({"a": 1, "b": 2})));

    let record = &records(&buf)[0];
    assert_eq!(record["a"], 1);
    assert_eq!(record["b"], 2);
    assert!(record.get("data").is_none());
}

#[test]
fn plain_args_stay_ordered_under_data() {
    let (logger, buf) = facade("svc", Severity::Debug);
    logger.debug(None, "m", &[json!("x"), json!({"y": [1, 2]})]);

    let record = &records(&buf)[0];
    assert_eq!(record["data"], json!(["x", {"y": [1, 2]}]));
    assert!(record.get("x").is_none());
}

#[test]
fn every_severity_and_shape_writes_exactly_one_line() {
    let (logger, buf) = facade("svc", Severity::Debug);
    let ctx = Context::background();
    let empty = Fields::new();

    let calls: Vec<(Severity, Box<dyn Fn() + '_>)> = vec![
        (Severity::Debug, Box::new(|| logger.debug(Some(&ctx), "msg", &[]))),
        (Severity::Info, Box::new(|| logger.info(Some(&ctx), "msg", &[]))),
        (Severity::Warn, Box::new(|| logger.warn(Some(&ctx), "msg", &[]))),
        (Severity::Error, Box::new(|| logger.error(Some(&ctx), "msg", &[]))),
        (Severity::Debug, Box::new(|| logger.debug_with_fields(None, "msg", &empty))),
        (Severity::Info, Box::new(|| logger.info_with_fields(None, "msg", &empty))),
        (Severity::Warn, Box::new(|| logger.warn_with_fields(None, "msg", &empty))),
        (Severity::Error, Box::new(|| logger.error_with_fields(None, "msg", &empty))),
        (Severity::Debug, Box::new(|| logger.debugf(None, format_args!("{}", "msg")))),
        (Severity::Info, Box::new(|| logger.infof(None, format_args!("{}", "msg")))),
        (Severity::Warn, Box::new(|| logger.warnf(None, format_args!("{}", "msg")))),
        (Severity::Error, Box::new(|| logger.errorf(None, format_args!("{}", "msg")))),
    ];

    for (level, call) in calls {
        buf.clear();
        call();
        let out = records(&buf);
        assert_eq!(out.len(), 1, "{level} call wrote {} lines", out.len());
        assert_eq!(out[0]["level"], level.as_str());
        assert_eq!(out[0]["msg"], "msg");
    }
}

#[test]
fn service_is_bound_once_and_repeated_verbatim() {
    let (logger, buf) = facade("billing worker/β", Severity::Debug);
    let clone = logger.clone();
    logger.info(None, "one", &[]);
    clone.errorf(None, format_args!("two"));
    logger.warn_with_fields(None, "three", &fields(json!({"service_hint": "ignored"})));

    let out = records(&buf);
    assert_eq!(out.len(), 3);
    for record in &out {
        assert_eq!(record["service"], "billing worker/β");
    }
}

#[test]
fn empty_service_name_is_accepted() {
    let (logger, buf) = facade("", Severity::Info);
    logger.info(None, "anonymous", &[]);
    assert_eq!(records(&buf)[0]["service"], "");
}

#[test]
fn timestamps_follow_call_order() {
    let (logger, buf) = facade("svc", Severity::Debug);
    for i in 0..20 {
        logger.infof(None, format_args!("tick {i}"));
    }
    let times: Vec<chrono::DateTime<chrono::FixedOffset>> = records(&buf)
        .iter()
        .map(|r| chrono::DateTime::parse_from_rfc3339(r["time"].as_str().unwrap()).unwrap())
        .collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}
