#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch preprocessor for the GI registry export.
//!
//! Reads the fixed-name export from the working directory and writes the
//! normalized dataset and summary artifacts the map frontend fetches.
//! One-shot transform with no flags; any I/O failure is fatal.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    gi_map_ingest::run()?;

    Ok(())
}
