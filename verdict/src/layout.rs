//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Reports on how a [`Result`](crate::Result) is laid out in memory.
//!
//! A `Result<Ok, Err>` is a one byte tag followed by storage shared by both payloads, with the
//! same layout as this C declaration:
//! ```c
//! struct {
//!     uint8_t tag; // 1 if `ok` is live, 0 if `err` is.
//!     union { Err err; Ok ok; } storage;
//! };
//! ```

use core::mem::{align_of, size_of};

const TAG_SIZE: usize = size_of::<u8>();

/// The layout of a `Result<Ok, Err>`, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultLayout {
    /// The size of the whole container.
    pub size: usize,
    /// The alignment of the whole container.
    pub align: usize,
    /// Where the success flag lives.
    pub tag_offset: usize,
    /// Where the live payload starts.
    pub storage_offset: usize,
    /// How many bytes are reserved for the payloads.
    pub storage_size: usize,
    /// The alignment of the payload storage.
    pub storage_align: usize,
}

impl ResultLayout {
    /// Computes the layout of `Result<Ok, Err>`.
    pub const fn of<Ok, Err>() -> Self {
        let storage_align = max(align_of::<Ok>(), align_of::<Err>());
        let storage_size = round_up(max(size_of::<Ok>(), size_of::<Err>()), storage_align);
        let storage_offset = round_up(TAG_SIZE, storage_align);
        let align = max(align_of::<u8>(), storage_align);
        Self {
            size: round_up(storage_offset + storage_size, align),
            align,
            tag_offset: 0,
            storage_offset,
            storage_size,
            storage_align,
        }
    }
    /// Bytes that belong to neither the tag nor the storage.
    pub const fn padding(&self) -> usize {
        self.size - TAG_SIZE - self.storage_size
    }
}

impl core::fmt::Display for ResultLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self {
            size,
            align,
            tag_offset,
            storage_offset,
            storage_size,
            storage_align,
        } = self;
        write!(
            f,
            "{size} bytes (align {align}): tag@{tag_offset}, storage@{storage_offset} ({storage_size} bytes, align {storage_align})"
        )
    }
}

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}
const fn round_up(value: usize, align: usize) -> usize {
    (value + align - 1) / align * align
}
