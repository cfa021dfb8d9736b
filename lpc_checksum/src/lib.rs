// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod checksum_image;
pub mod vector_table;

pub use checksum_image::{add_checksum, checksum_output_path, update_checksum, PatchedImage};
pub use vector_table::VectorTable;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("image is {0} bytes; a vector table needs at least 32")]
    ImageTooShort(usize),

    #[error("{} has no `.bin` in its name; refusing to overwrite it", .0.display())]
    MissingBinExtension(PathBuf),

    #[error("{} does not have a valid UTF-8 file name", .0.display())]
    InvalidFileName(PathBuf),

    #[error("output path {} is the same as the input", .0.display())]
    OutputAliasesInput(PathBuf),
}
