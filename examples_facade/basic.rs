use json_log_facade::{Context, Fields, LogFacade, Logger, Severity};
use serde_json::json;

fn main() {
    // No sink: records go to stdout.
    let logger = LogFacade::new("auth-svc", Severity::Debug, None);

    logger.info(None, "service started", &[json!("v0.1.0"), json!(8080)]);
    logger.debugf(None, format_args!("loaded {} signing keys", 3));

    let mut fields = Fields::new();
    fields.insert("user".into(), json!("u1"));
    fields.insert("expired_for_secs".into(), json!(42));
    logger.warn_with_fields(None, "token expired", &fields);

    let (ctx, cancel) = Context::with_cancel();
    cancel.cancel();
    // The context is only handed to the sink; the record is still written.
    logger.error(Some(&ctx), "request aborted", &[json!({"path": "/login"})]);
}
