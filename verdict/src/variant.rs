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

//! Tagged wrappers that carry a payload into a [`Result`](crate::Result).

/// The value-less success payload.
///
/// A `Result<Nothing, E>` only tells its consumer whether the operation succeeded.
pub type Nothing = ();

/// A payload tagged as the success case.
///
/// Only lives between a call to [`ok`] and the construction of a [`Result`](crate::Result).
#[repr(transparent)]
#[must_use = "a `Success` does nothing until it is turned into a `Result`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Success<T>(pub T);

/// A payload tagged as the failure case.
///
/// Only lives between a call to [`err`] and the construction of a [`Result`](crate::Result).
#[repr(transparent)]
#[must_use = "a `Failure` does nothing until it is turned into a `Result`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    /// Tags `value` as a success.
    pub const fn new(value: T) -> Self {
        Self(value)
    }
    /// Strips the tag.
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<E> Failure<E> {
    /// Tags `value` as a failure.
    pub const fn new(value: E) -> Self {
        Self(value)
    }
    /// Strips the tag.
    pub fn into_inner(self) -> E {
        self.0
    }
}
impl<T> From<T> for Success<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
impl<E> From<E> for Failure<E> {
    fn from(value: E) -> Self {
        Self(value)
    }
}

/// Signals success without a payload.
pub const fn ok_unit() -> Success<Nothing> {
    Success(())
}

/// Signals success with `value`.
///
/// `value` is taken by value: pass a clone to keep using the original.
pub const fn ok<T>(value: T) -> Success<T> {
    Success(value)
}

/// Signals failure with `value`.
pub const fn err<E>(value: E) -> Failure<E> {
    Failure(value)
}
