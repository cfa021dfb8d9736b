// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Stamp the NXP LPC boot ROM checksum into a firmware image
///
/// The checksum is written to the reserved vector at 0x1c and the result is
/// saved next to the input as `<name>-checksum.bin`.
#[derive(Debug, Parser)]
#[clap(name = "lpc_checksum", version)]
struct Opts {
    /// source file (binary)
    src_bin: PathBuf,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (dest_bin, patched) = lpc_checksum::add_checksum(&opts.src_bin)
        .with_context(|| format!("could not checksum {}", opts.src_bin.display()))?;

    println!("checksum: 0x{:08X}", patched.checksum);
    println!("output: {}", dest_bin.display());
    info!(
        "checksummed image ({} bytes) written to {}",
        patched.bytes_written,
        dest_bin.display()
    );

    Ok(())
}
