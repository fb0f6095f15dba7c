use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use json_log_facade::noop_sink::NoopSink;
use json_log_facade::{Fields, LogFacade, Logger, Severity};
use serde_json::json;

const THREADS: u64 = 8;
const PER_THREAD: u64 = 25_000;

fn run(label: &str, logger: LogFacade) {
    let start = Instant::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                let mut fields = Fields::new();
                fields.insert("thread".into(), json!(t));
                for i in 0..PER_THREAD {
                    fields.insert("iteration".into(), json!(i));
                    logger.error_with_fields(None, "load test error", &fields);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("load thread panicked");
    }

    let n = THREADS * PER_THREAD;
    let elapsed = start.elapsed();
    println!("{}: logged {} records in {:?} (~{:.0} rec/s, {} dropped)",
        label,
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64(),
        logger.dropped_writes()
    );
}

fn main() {
    run("noop sink", LogFacade::with_sink("load", Arc::new(NoopSink)));
    run("sink writer", LogFacade::new("load", Severity::Debug, Some(Box::new(io::sink()))));
}
