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

//! Termination on contract violations.
//!
//! Asking a [`Result`](crate::Result) for the variant it doesn't hold is a programming error.
//! It is never reported through a return value: the process is stopped right where the misuse
//! happened.
//!
//! With the `std` feature (default), the diagnostic is written to stderr followed by a newline,
//! and the process is aborted. Without it, the diagnostic becomes the payload of a panic.
//! With the `tracing` feature, an `ERROR` event targeting `verdict` is emitted first: its
//! `message` field is the diagnostic, its `location` field the misuse site.

/// Written by [`Result::get_ok`](crate::Result::get_ok) when called on a failure.
pub const GET_OK_ON_ERR: &str = "Attempting to Result::get_ok an error Result.";
/// Written by [`Result::get_err`](crate::Result::get_err) when called on a success.
pub const GET_ERR_ON_OK: &str = "Attempting to Result::get_err an ok Result.";

/// Reports `message` and stops the process.
#[cold]
#[inline(never)]
#[track_caller]
pub fn terminate(message: &str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "verdict",
        location = %core::panic::Location::caller(),
        "{message}"
    );
    abort_with(message)
}

#[cfg(feature = "std")]
fn abort_with(message: &str) -> ! {
    use std::io::Write;
    let mut stderr = std::io::stderr().lock();
    // stderr may be closed: abort regardless.
    let _ = writeln!(stderr, "{message}");
    let _ = stderr.flush();
    std::process::abort()
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn abort_with(message: &str) -> ! {
    panic!("{}", message)
}
