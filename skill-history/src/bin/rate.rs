use skill_history::batch_config::{Batch, BatchConfig};
use skill_history::error::RunError;
use skill_history::telemetry::init_subscriber;

fn run(config: BatchConfig) -> Result<(), RunError> {
    let batch = Batch::from_config(config)?;
    let today = chrono::Local::now().date_naive();
    let results = batch.eval(today)?;
    tracing::info!(
        "Rated {} users in {} seconds; {} failed, {} scores rejected {:?}",
        results.entries.len(),
        results.secs_elapsed,
        results.failures.len(),
        results.rejected.total(),
        results.rejected
    );
    for failure in &results.failures {
        tracing::error!("{}: {}", failure.username, failure.error);
    }
    batch.save(&results)
}

/// Computes the rating history of every user in the configured score file
fn main() {
    init_subscriber("info");

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        tracing::error!("Usage: {} [config.json5]", args[0]);
        return;
    }
    let config = match args.get(1) {
        Some(path) => match BatchConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("{}", err);
                return;
            }
        },
        None => BatchConfig::default(),
    };

    if let Err(err) = run(config) {
        tracing::error!("{}", err);
    }
}
