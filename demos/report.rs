//! Resolve a set of flags and print the diagnostic table
//!
//! Run with `RUST_LOG=envflag=debug` to see where each value came from.

use envflag::{Flag, Flags};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut host = String::new();
    let mut port: i32 = 0;
    let mut workers: isize = 0;
    let mut sample_rate: f32 = 0.0;
    let mut budget: f64 = 0.0;

    let mut flags = Flags::new()
        .with_title("Service Flags")
        .with(Flag::new("HOST", &mut host, "127.0.0.1".to_string(), true))
        .with(Flag::optional("PORT", &mut port, 8080))
        .with(Flag::optional("WORKERS", &mut workers, 4))
        .with(Flag::optional("SAMPLE_RATE", &mut sample_rate, 0.1))
        .with(Flag::optional("BUDGET", &mut budget, 1.5));

    // Configuration is a precondition for everything else
    if let Err(err) = flags.resolve() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    print!("{flags}");
}
