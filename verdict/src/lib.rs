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

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! Results without unwinding.
//!
//! A [`Result`] holds exactly one of two payloads: the success value or the failure value.
//! Producers build one from a tagged wrapper ([`ok`], [`ok_unit`] or [`err`]),
//! consumers inspect it with [`Result::is_ok`] or [`Result::try_get`] before reaching for the
//! fail-fast accessors ([`Result::get_ok`], [`Result::get_err`], [`Result::expect`]).
//!
//! Asking a [`Result`] for the variant it doesn't hold is a contract violation, not an error:
//! the process writes a diagnostic to stderr and aborts (see [`fatal`]).
//!
//! ```
//! use verdict::{err, ok, Result};
//!
//! fn halve(value: u32) -> Result<u32, &'static str> {
//!     if value % 2 == 0 {
//!         ok(value / 2).into()
//!     } else {
//!         err("odd").into()
//!     }
//! }
//!
//! assert_eq!(*halve(6).expect("6 is even"), 3);
//! assert_eq!(halve(7).try_get(0), 0);
//! assert!(!bool::from(&halve(7)));
//! ```

pub mod fatal;
pub mod layout;
pub mod result;
pub mod variant;

pub use layout::ResultLayout;
pub use result::Result;
pub use variant::{err, ok, ok_unit, Failure, Nothing, Success};

#[cfg(test)]
mod tests;
