// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: fill a recbox container and print it
//
// Creates a container with room for 10 records, adds three, prints the table
// and releases the container. Any failure is reported on stderr and turns
// into a non-zero exit code.

use std::process::ExitCode;

use log::{error, info};
use recbox::{Container, ContainerError, VERSION};

const INITIAL_CAPACITY: usize = 10;

const ITEMS: [(i32, &str, f64); 3] = [(1, "Item1", 10.5), (2, "Item2", 20.7), (3, "Item3", 15.3)];

fn fill(container: &mut Container) -> Result<(), ContainerError> {
    for (id, name, value) in ITEMS {
        container.insert(id, name, value)?;
        info!("added record {id}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("recbox demo v{VERSION}");

    let mut container = match Container::create(INITIAL_CAPACITY) {
        Ok(container) => container,
        Err(err) => {
            error!("create failed: {err}");
            eprintln!("Failed to create container: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fill(&mut container) {
        error!("insert failed: {err}");
        eprintln!("Failed to add item: {err}");
        container.release();
        return ExitCode::FAILURE;
    }

    print!("{container}");

    container.release();

    println!("Program completed successfully");
    ExitCode::SUCCESS
}
