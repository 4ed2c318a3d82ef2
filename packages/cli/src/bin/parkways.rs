//! Parkways demonstration.
//!
//! Builds two visitors, two national parks and three trips, then prints the
//! query results. Always exits with status 0.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parkways -- --format json
//! ```

use clap::Parser;
use parkways_cli::Args;
use parkways_shared::setup_logger;

fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    print!("{}", parkways_cli::run(&args));
}
