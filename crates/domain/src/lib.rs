// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod billing;
mod catalog;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use billing::{Charge, billed_hours, compute_fee, quote};
pub use catalog::VehicleCategory;
pub use error::DomainError;

// Re-export public types
pub use types::{
    LicensePlate, Payment, Session, SpotNumber, TIMESTAMP_FORMAT, Vehicle, format_timestamp,
    parse_timestamp,
};
pub use validation::{validate_capacity, validate_plate_not_parked};
