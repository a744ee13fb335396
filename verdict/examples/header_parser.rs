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

//! Validates a few headers and reports the ones that are too long.
//!
//! Run with `cargo run --example header_parser -- <header>...`

use verdict::{err, ok_unit, Result};

const MAX_HEADER_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Oversized {
    actual: usize,
    limit: usize,
}

fn check_header(header: &str) -> Result<(), Oversized> {
    if header.len() > MAX_HEADER_LEN {
        return err(Oversized {
            actual: header.len(),
            limit: MAX_HEADER_LEN,
        })
        .into();
    }
    ok_unit().into()
}

fn main() {
    let mut headers: Vec<String> = std::env::args().skip(1).collect();
    if headers.is_empty() {
        headers = vec![
            "Host: example.com".into(),
            "X-Forwarded-For: 10.0.0.1, 10.0.0.2, 10.0.0.3".into(),
        ];
    }
    for header in &headers {
        let result = check_header(header);
        if result.is_ok() {
            println!("ok        {header}");
        } else {
            let Oversized { actual, limit } = result.get_err();
            println!("too long  {header} ({actual} > {limit})");
        }
    }
}
