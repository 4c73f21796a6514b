//! Runs the annotations walkthrough and prints its transcript to stdout.
//!
//! Set `RUST_LOG=annotated=trace` to log every discovered marker and call on
//! stderr.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use annotated::demo::{self, Echo};
use annotated::{Annotation, Inspect};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    demo::Annotations::inspect(|Annotation { target, member, marker }| {
        tracing::debug!(%target, member, %marker, "registered marker");
    });

    demo::run(Echo::Stdout).context("annotations walkthrough failed")?;
    Ok(())
}
