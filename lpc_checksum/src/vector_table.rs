// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::Error;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};
use std::ops::Range;

/// Bytes covered by the boot ROM's vector table check
pub const VECTOR_TABLE_LEN: usize = 0x20;

/// Number of words that feed into the checksum (stack pointer, reset and
/// the first five exception vectors)
pub const VECTOR_COUNT: usize = 7;

/// The reserved vector slot where the boot ROM expects the checksum
pub const CHECKSUM_OFFSET: Range<usize> = 0x1c..0x20;

/// The leading eight words of an LPC flash image.
///
/// The boot ROM only hands control to the image if all eight words add up
/// to zero, modulo 2^32.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VectorTable {
    pub vectors: [u32; VECTOR_COUNT],
    pub checksum: u32,
}

impl VectorTable {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < VECTOR_TABLE_LEN {
            return Err(Error::ImageTooShort(bytes.len()));
        }

        let mut vectors = [0u32; VECTOR_COUNT];
        LittleEndian::read_u32_into(&bytes[..CHECKSUM_OFFSET.start], &mut vectors);
        let checksum = LittleEndian::read_u32(&bytes[CHECKSUM_OFFSET]);

        Ok(VectorTable { vectors, checksum })
    }

    /// Two's complement of the wrapping sum of the seven vectors
    pub fn expected_checksum(&self) -> u32 {
        let sum = self
            .vectors
            .iter()
            .fold(0u32, |acc, v| acc.wrapping_add(*v));
        0u32.wrapping_sub(sum)
    }

    pub fn is_valid(&self) -> bool {
        self.vectors
            .iter()
            .fold(self.checksum, |acc, v| acc.wrapping_add(*v))
            == 0
    }
}

/// Zero-extends `image` so it covers a whole vector table.
pub fn pad_image(image: &mut Vec<u8>) {
    if image.len() < VECTOR_TABLE_LEN {
        debug!("padding {}-byte image to {VECTOR_TABLE_LEN} bytes", image.len());
        image.resize(VECTOR_TABLE_LEN, 0);
    }
}

/// Pads `image` if needed and stores the boot ROM checksum at 0x1c.
///
/// Everything past the vector table is left alone.
pub fn patch_checksum(image: &mut Vec<u8>) -> Result<u32, Error> {
    pad_image(image);

    let table = VectorTable::from_bytes(image)?;
    for (i, v) in table.vectors.iter().enumerate() {
        trace!("vector {i}: {v:#010x}");
    }

    let checksum = table.expected_checksum();
    debug!("computed checksum {checksum:#010x}");
    LittleEndian::write_u32(&mut image[CHECKSUM_OFFSET], checksum);
    debug_assert!(VectorTable { checksum, ..table }.is_valid());

    Ok(checksum)
}
