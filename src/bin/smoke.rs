//! Deployment smoke test
//!
//! Runs the checks in [`status_check::smoke`] against a running status-check
//! service and exits non-zero if any of them fails.
//!
//! Usage:
//!   status-smoke --base-url http://localhost:8000 --origin http://localhost:3000

use std::process::ExitCode;

use clap::Parser;
use status_check::smoke::Smoke;
use tracing::debug;

#[derive(Parser)]
#[command(name = "status-smoke")]
#[command(about = "Smoke-test a deployed status-check service")]
#[command(version)]
struct Cli {
    /// Service root URL (any path prefix included)
    #[arg(short, long, env = "SMOKE_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Origin sent with the CORS preflight request
    #[arg(short, long, default_value = "http://localhost:3000")]
    origin: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let smoke = Smoke::new(cli.base_url, cli.origin);
    println!("Smoke testing {}", smoke.base_url());

    let results = smoke.run_all().await;

    let total = results.len();
    let mut passed = 0;
    for (name, result) in &results {
        match result {
            Ok(message) => {
                passed += 1;
                println!("PASS {name}: {message}");
            }
            Err(e) => println!("FAIL {name}: {e}"),
        }
    }
    debug!(passed, total, "Smoke test finished");

    println!("{passed}/{total} checks passed");
    if passed == total {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
