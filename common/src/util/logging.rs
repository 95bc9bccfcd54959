use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{info, LevelFilter};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

static MULTI: OnceLock<MultiProgress> = OnceLock::new();

pub fn initialize_logging(log_level: LevelFilter) {
    let logger = env_logger::builder()
        .filter_level(log_level)
        .parse_default_env() // Allow overriding log level through RUST_LOG env var
        .build();

    let multi = MultiProgress::new();

    // Route log lines through the progress bar handle, so that bars don't jump around
    LogWrapper::new(multi.clone(), logger)
        .try_init()
        .expect("logging was already initialized");

    MULTI
        .set(multi)
        .expect("logging was already initialized");
}

/// Run a (potentially long-running) task with a spinner next to it, then log how long it took.
pub fn run_with_spinner<F, Out>(target: &str, task_desc: &str, function: F) -> Out
where
    F: FnOnce() -> Out,
{
    let start_time = SystemTime::now();

    let pb = ProgressBar::new_spinner()
        .with_message(format!("{}...", task_desc))
        .with_style(
            ProgressStyle::with_template("{spinner:.white} [{elapsed:.green}] {msg}").unwrap(),
        );
    pb.enable_steady_tick(Duration::from_millis(100));

    let multi = MULTI.get().expect("logging is not initialized");
    multi.add(pb.clone());

    let out = function();

    pb.finish_and_clear();
    multi.remove(&pb);
    let elapsed = indicatif::HumanDuration(start_time.elapsed().unwrap());
    info!(target: target, "{} finished (took {})", task_desc, elapsed);

    out
}
