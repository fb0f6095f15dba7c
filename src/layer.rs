use crate::facade::Logger;
use crate::level::Severity;
use crate::record::Fields;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that turns every `tracing` event into a
/// field-annotated call on a [`Logger`].
///
/// The event's `message` becomes `msg`; every other field becomes a
/// top-level key, next to the event's `target`. Level filtering is left
/// to the logger's sink.
pub struct FacadeLayer<L> {
    logger: L,
}

impl<L: Logger> FacadeLayer<L> {
    pub fn new(logger: L) -> Self {
        FacadeLayer { logger }
    }
}

impl<S, L> Layer<S> for FacadeLayer<L>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    L: Logger + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();

        let mut fields = Fields::new();
        let mut message: Option<String> = None;
        let mut visitor = FieldVisitor { fields: &mut fields, message: &mut message };
        event.record(&mut visitor);

        fields.insert("target".to_string(), serde_json::Value::from(meta.target()));

        self.logger.log_with_fields(
            None,
            Severity::from(meta.level()),
            message.as_deref().unwrap_or_default(),
            &fields,
        );
    }
}

pub struct FieldVisitor<'a> {
    pub fields: &'a mut Fields,
    pub message: &'a mut Option<String>,
}

impl FieldVisitor<'_> {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::from(value));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, serde_json::Value::from(value));
    }

    // NaN and infinities have no JSON form and come out as null.
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.insert(field, serde_json::Value::String(format!("{:?}", value)));
        }
    }
}
