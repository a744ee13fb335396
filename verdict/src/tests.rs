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

extern crate std;

use std::{cell::Cell, format, rc::Rc, string::String, vec, vec::Vec};

use crate::{err, ok, ok_unit, Failure, Result, Success};

/// Counts how many times values sharing the same counter were dropped.
#[derive(Debug)]
struct DropCounter {
    id: u32,
    drops: Rc<Cell<usize>>,
}
impl Clone for DropCounter {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            drops: self.drops.clone(),
        }
    }
}
impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn counters() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[test]
fn success_round_trip() {
    let result: Result<i32, i32> = ok(3).into();
    assert!(result.is_ok());
    assert!(!result.is_err());
    assert!(bool::from(&result));
    assert_eq!(*result.get_ok(), 3);
    assert_eq!(*result.expect("x"), 3);
    assert_eq!(result.try_get(7), 3);
    assert_eq!(result.ok_ref(), Some(&3));
    assert_eq!(result.err_ref(), None);
}

#[test]
fn failure_round_trip() {
    let result: Result<i32, i32> = err(0).into();
    assert!(result.is_err());
    assert!(!bool::from(&result));
    assert_eq!(*result.get_err(), 0);
    assert_eq!(result.try_get(7), 7);
    assert_eq!(result.ok_ref(), None);
    assert_eq!(result.err_ref(), Some(&0));
}

#[test]
fn value_less_success() {
    let result: Result<(), String> = ok_unit().into();
    assert!(result.is_ok());
    result.expect("no payload, still a success");
    let failed: Result<(), String> = err(String::from("nope")).into();
    assert_eq!(failed.get_err(), "nope");
}

#[test]
fn wrappers() {
    assert_eq!(ok(5u8), Success(5u8));
    assert_eq!(Success::from("hi").into_inner(), "hi");
    assert_eq!(err(5u8), Failure::new(5u8));
    assert_eq!(Failure::from(vec![1u8]).into_inner(), vec![1u8]);
}

#[test]
fn std_conversions() {
    let result: Result<u8, String> = core::result::Result::<u8, String>::Ok(4).into();
    assert_eq!(result.as_std(), Ok(&4));
    let back: core::result::Result<u8, String> = result.into();
    assert_eq!(back, Ok(4));
    let result: Result<u8, String> = core::result::Result::<u8, String>::Err("e".into()).into();
    assert_eq!(result.as_std(), Err(&String::from("e")));
}

#[test]
fn debug_matches_std() {
    let success: Result<u8, u16> = ok(1).into();
    let failure: Result<u8, u16> = err(2).into();
    assert_eq!(format!("{success:?}"), "Ok(1)");
    assert_eq!(format!("{failure:?}"), "Err(2)");
}

#[test]
fn equality_depends_on_variant() {
    let a: Result<u8, u8> = ok(1).into();
    let b: Result<u8, u8> = err(1).into();
    assert_ne!(a, b);
    assert_eq!(a, Result::new_ok(1));
    assert_eq!(b, Result::new_err(1));
}

#[test]
fn clone_is_independent() {
    let original: Result<Vec<u8>, String> = ok(vec![1, 2, 3]).into();
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_ne!(copy.get_ok().as_ptr(), original.get_ok().as_ptr());
    drop(original);
    assert_eq!(copy.get_ok(), &[1, 2, 3]);

    let original: Result<u8, String> = err(String::from("boom")).into();
    let copy = original.clone();
    assert_ne!(copy.get_err().as_ptr(), original.get_err().as_ptr());
    drop(original);
    assert_eq!(copy.get_err(), "boom");
}

#[test]
fn only_the_live_payload_is_dropped() {
    let (ok_drops, err_drops) = counters();
    let result: Result<DropCounter, DropCounter> = ok(DropCounter {
        id: 1,
        drops: ok_drops.clone(),
    })
    .into();
    assert_eq!(ok_drops.get(), 0);
    drop(result);
    assert_eq!(ok_drops.get(), 1);
    assert_eq!(err_drops.get(), 0);

    let result: Result<DropCounter, DropCounter> = err(DropCounter {
        id: 2,
        drops: err_drops.clone(),
    })
    .into();
    drop(result);
    assert_eq!(ok_drops.get(), 1);
    assert_eq!(err_drops.get(), 1);
}

#[test]
fn clone_drops_each_copy_once() {
    let (drops, _) = counters();
    let original: Result<DropCounter, u8> = ok(DropCounter {
        id: 7,
        drops: drops.clone(),
    })
    .into();
    let copy = original.clone();
    assert_eq!(copy.get_ok().id, 7);
    drop(original);
    assert_eq!(drops.get(), 1);
    drop(copy);
    assert_eq!(drops.get(), 2);
}

#[test]
fn move_transfers_without_dropping() {
    let (drops, _) = counters();
    let source: Result<u8, DropCounter> = err(DropCounter {
        id: 9,
        drops: drops.clone(),
    })
    .into();
    let moved = source;
    assert_eq!(drops.get(), 0);
    let mut boxed = vec![moved];
    assert_eq!(drops.get(), 0);
    let moved = boxed.pop();
    assert_eq!(moved.as_ref().map(|r| r.get_err().id), Some(9));
    drop(moved);
    assert_eq!(drops.get(), 1);
}

#[test]
fn owning_accessors() {
    let (drops, _) = counters();
    let result: Result<DropCounter, u8> = ok(DropCounter {
        id: 3,
        drops: drops.clone(),
    })
    .into();
    let payload = result.into_ok();
    assert_eq!(drops.get(), 0);
    assert_eq!(payload.id, 3);
    drop(payload);
    assert_eq!(drops.get(), 1);

    let result: Result<u8, String> = err(String::from("owned")).into();
    assert_eq!(result.into_err(), "owned");
}

#[test]
fn const_construction() {
    const SUCCESS: Result<u16, u16> = Result::new_ok(12);
    const IS_OK: bool = SUCCESS.is_ok();
    const FAILURE_IS_ERR: bool = Result::<u16, u16>::new_err(0).is_err();
    assert!(IS_OK);
    assert!(FAILURE_IS_ERR);
}

#[cfg(not(feature = "std"))]
#[test]
#[should_panic(expected = "Attempting to Result::get_ok an error Result.")]
fn get_ok_on_failure_panics_without_std() {
    let result: Result<i32, i32> = err(0).into();
    let _ = result.get_ok();
}

#[cfg(not(feature = "std"))]
#[test]
#[should_panic(expected = "Attempting to Result::get_err an ok Result.")]
fn get_err_on_success_panics_without_std() {
    let result: Result<i32, i32> = ok(3).into();
    let _ = result.get_err();
}

#[cfg(not(feature = "std"))]
#[test]
#[should_panic(expected = "could not flush the journal")]
fn expect_on_failure_panics_with_message_without_std() {
    let result: Result<(), u8> = err(1).into();
    result.expect("could not flush the journal");
}
