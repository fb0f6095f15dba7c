use json_log_facade::config::FacadeConfig;
use json_log_facade::init::init_tracing;
use json_log_facade::Severity;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let facade = FacadeConfig::new("bridge-example", Severity::Info).build()?;
    init_tracing(facade)?;

    info!("tracing bridge example started");
    error!(db = "orders", attempt = 3, "simulated error routed through the facade");
    Ok(())
}
