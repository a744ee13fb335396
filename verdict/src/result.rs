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

//! The result container.

use crate::fatal::{self, GET_ERR_ON_OK, GET_OK_ON_ERR};
use crate::layout::ResultLayout;
use crate::variant::{Failure, Success};

/// Storage for a [`Result`].
///
/// `repr(C, u8)` lays this out as `{ tag: u8, storage: union { Err, Ok } }`: the tag is the
/// success flag (`0` or `1`), and the storage is sized and aligned for the larger payload.
#[repr(C, u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<Ok, Err> {
    Err(Err) = 0,
    Ok(Ok) = 1,
}

/// Either a success payload of type `Ok` or a failure payload of type `Err`.
///
/// The variant is chosen once, at construction, and never changes afterwards: no accessor
/// hands out mutable access to the payload. Cloning duplicates the active payload; moving
/// transfers it, and only the active payload is ever dropped.
///
/// `Err` may not be zero-sized, since a failure must carry information. This rejects `()`, and
/// also field-less error types such as `core::fmt::Error` or `struct Timeout;`:
/// ```compile_fail
/// let result: verdict::Result<u8, ()> = verdict::ok(1).into();
/// ```
/// ```compile_fail
/// let result: verdict::Result<u8, core::fmt::Error> = verdict::ok(1).into();
/// ```
#[repr(transparent)]
#[must_use = "this `Result` may be a failure, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<Ok, Err> {
    slot: Slot<Ok, Err>,
}

impl<Ok, Err> Result<Ok, Err> {
    const FAILURE_CARRIES_DATA: () = assert!(
        core::mem::size_of::<Err>() != 0,
        "a failure payload must carry information: zero-sized `Err` types are not allowed"
    );
    const SUCCESS_CARRIES_DATA: () = assert!(
        core::mem::size_of::<Ok>() != 0,
        "this accessor has nothing to return for a zero-sized `Ok` type: use `expect` or `is_ok`"
    );

    /// How this instantiation is laid out in memory.
    pub const LAYOUT: ResultLayout = ResultLayout::of::<Ok, Err>();

    /// Construct the success variant.
    pub const fn new_ok(value: Ok) -> Self {
        let () = Self::FAILURE_CARRIES_DATA;
        Self {
            slot: Slot::Ok(value),
        }
    }
    /// Construct the failure variant.
    pub const fn new_err(value: Err) -> Self {
        let () = Self::FAILURE_CARRIES_DATA;
        Self {
            slot: Slot::Err(value),
        }
    }

    /// Returns `true` if the success payload is the live one.
    pub const fn is_ok(&self) -> bool {
        matches!(self.slot, Slot::Ok(_))
    }
    /// Returns `true` if the failure payload is the live one.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns a copy of the success payload, or `default` if this is a failure.
    ///
    /// Not available when `Ok` is zero-sized:
    /// ```compile_fail
    /// let result: verdict::Result<(), u8> = verdict::ok_unit().into();
    /// result.try_get(());
    /// ```
    pub fn try_get(&self, default: Ok) -> Ok
    where
        Ok: Clone,
    {
        let () = Self::SUCCESS_CARRIES_DATA;
        match &self.slot {
            Slot::Ok(value) => value.clone(),
            Slot::Err(_) => default,
        }
    }

    /// Returns the success payload.
    ///
    /// Not available when `Ok` is zero-sized:
    /// ```compile_fail
    /// let result: verdict::Result<(), u8> = verdict::ok_unit().into();
    /// result.get_ok();
    /// ```
    ///
    /// # Aborts
    /// If this is a failure, [`GET_OK_ON_ERR`] is reported through [`fatal::terminate`].
    #[track_caller]
    pub fn get_ok(&self) -> &Ok {
        let () = Self::SUCCESS_CARRIES_DATA;
        match &self.slot {
            Slot::Ok(value) => value,
            Slot::Err(_) => fatal::terminate(GET_OK_ON_ERR),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Aborts
    /// If this is a success, [`GET_ERR_ON_OK`] is reported through [`fatal::terminate`].
    #[track_caller]
    pub fn get_err(&self) -> &Err {
        match &self.slot {
            Slot::Err(value) => value,
            Slot::Ok(_) => fatal::terminate(GET_ERR_ON_OK),
        }
    }

    /// Returns the success payload, which may be `()`.
    ///
    /// # Aborts
    /// If this is a failure, `message` is reported through [`fatal::terminate`].
    #[track_caller]
    pub fn expect(&self, message: &str) -> &Ok {
        match &self.slot {
            Slot::Ok(value) => value,
            Slot::Err(_) => fatal::terminate(message),
        }
    }

    /// Owning version of [`Self::get_ok`].
    ///
    /// Not available when `Ok` is zero-sized:
    /// ```compile_fail
    /// let result: verdict::Result<(), u8> = verdict::ok_unit().into();
    /// result.into_ok();
    /// ```
    ///
    /// # Aborts
    /// If this is a failure.
    #[track_caller]
    pub fn into_ok(self) -> Ok {
        let () = Self::SUCCESS_CARRIES_DATA;
        match self.slot {
            Slot::Ok(value) => value,
            Slot::Err(_) => fatal::terminate(GET_OK_ON_ERR),
        }
    }

    /// Owning version of [`Self::get_err`].
    ///
    /// # Aborts
    /// If this is a success.
    #[track_caller]
    pub fn into_err(self) -> Err {
        match self.slot {
            Slot::Err(value) => value,
            Slot::Ok(_) => fatal::terminate(GET_ERR_ON_OK),
        }
    }

    /// Returns the success payload by reference if it exists, `None` otherwise.
    pub const fn ok_ref(&self) -> Option<&Ok> {
        match &self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Err(_) => None,
        }
    }
    /// Returns the failure payload by reference if it exists, `None` otherwise.
    pub const fn err_ref(&self) -> Option<&Err> {
        match &self.slot {
            Slot::Err(value) => Some(value),
            Slot::Ok(_) => None,
        }
    }

    /// Converts to a standard [`Result`](core::result::Result) of references to the payloads.
    pub const fn as_std(&self) -> core::result::Result<&Ok, &Err> {
        match &self.slot {
            Slot::Ok(value) => core::result::Result::Ok(value),
            Slot::Err(value) => core::result::Result::Err(value),
        }
    }
}

impl<Ok, Err> From<Success<Ok>> for Result<Ok, Err> {
    fn from(Success(value): Success<Ok>) -> Self {
        Self::new_ok(value)
    }
}
impl<Ok, Err> From<Failure<Err>> for Result<Ok, Err> {
    fn from(Failure(value): Failure<Err>) -> Self {
        Self::new_err(value)
    }
}
impl<Ok, Err> From<core::result::Result<Ok, Err>> for Result<Ok, Err> {
    fn from(value: core::result::Result<Ok, Err>) -> Self {
        match value {
            core::result::Result::Ok(value) => Self::new_ok(value),
            core::result::Result::Err(value) => Self::new_err(value),
        }
    }
}
impl<Ok, Err> From<Result<Ok, Err>> for core::result::Result<Ok, Err> {
    fn from(value: Result<Ok, Err>) -> Self {
        match value.slot {
            Slot::Ok(value) => Ok(value),
            Slot::Err(value) => Err(value),
        }
    }
}
impl<Ok, Err> From<&Result<Ok, Err>> for bool {
    fn from(value: &Result<Ok, Err>) -> Self {
        value.is_ok()
    }
}

impl<Ok, Err> core::fmt::Debug for Result<Ok, Err>
where
    Ok: core::fmt::Debug,
    Err: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.as_std(), f)
    }
}
