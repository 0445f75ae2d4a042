//! Basic usage example

use envflag::{Flag, Flags};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "32");

    let mut database_url = String::new();
    let mut max_connections: i32 = 0;
    let mut timeout_secs: i64 = 0;

    // Required flag: DATABASE_URL must be set
    // Optional flags fall back to their defaults
    let mut flags = Flags::new()
        .with(Flag::required("DATABASE_URL", &mut database_url))
        .with(Flag::optional("MAX_CONNECTIONS", &mut max_connections, 10))
        .with(Flag::optional("TIMEOUT_SECS", &mut timeout_secs, 30));
    envflag::parse(&mut flags)?;
    drop(flags);

    println!("Configuration loaded:");
    println!("  Database URL: {}", database_url);
    println!("  Max Connections: {}", max_connections);
    println!("  Timeout: {}s", timeout_secs);

    Ok(())
}
