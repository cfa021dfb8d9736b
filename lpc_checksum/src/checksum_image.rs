// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::vector_table::patch_checksum;
use crate::Error;
use log::debug;
use std::path::{Path, PathBuf};

const BIN_EXTENSION: &str = ".bin";
const CHECKSUM_SUFFIX: &str = "-checksum.bin";

/// Result of a successful patch
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PatchedImage {
    pub checksum: u32,
    pub bytes_written: usize,
}

/// Derives the output name by replacing the first `.bin` in the file name
/// with `-checksum.bin`, e.g. `firmware.bin` becomes `firmware-checksum.bin`.
///
/// Only the final path component is rewritten. A name without `.bin` is
/// rejected, since the output would otherwise land on top of the input.
pub fn checksum_output_path(src: &Path) -> Result<PathBuf, Error> {
    let name = src
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFileName(src.to_path_buf()))?;

    if !name.contains(BIN_EXTENSION) {
        return Err(Error::MissingBinExtension(src.to_path_buf()));
    }

    Ok(src.with_file_name(name.replacen(BIN_EXTENSION, CHECKSUM_SUFFIX, 1)))
}

/// Reads `src`, stamps the vector table checksum and writes the result to
/// `dest`, creating or overwriting it.
pub fn update_checksum(src: &Path, dest: &Path) -> Result<PatchedImage, Error> {
    if src == dest {
        return Err(Error::OutputAliasesInput(dest.to_path_buf()));
    }

    let mut bytes = std::fs::read(src).map_err(|source| Error::FileNotFound {
        path: src.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), src.display());

    let checksum = patch_checksum(&mut bytes)?;

    std::fs::write(dest, &bytes).map_err(|source| Error::Write {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(PatchedImage {
        checksum,
        bytes_written: bytes.len(),
    })
}

/// Patches `src` into the file named by [`checksum_output_path`].
pub fn add_checksum(src: &Path) -> Result<(PathBuf, PatchedImage), Error> {
    let dest = checksum_output_path(src)?;
    let patched = update_checksum(src, &dest)?;
    Ok((dest, patched))
}
