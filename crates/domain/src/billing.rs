// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fee computation for completed stays.
//!
//! ## Invariants
//!
//! - Any started hour is billed as a full hour
//! - Zero elapsed time bills zero hours
//! - An exit earlier than the entry is treated as zero elapsed time

use crate::catalog::VehicleCategory;
use time::{Duration, PrimitiveDateTime};

const SECONDS_PER_HOUR: u64 = 3600;

/// Billed hours and the resulting fee for one stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Parked duration rounded up to whole hours.
    pub billed_hours: u64,
    /// Billed hours multiplied by the category rate.
    pub fee: f64,
}

/// Returns the number of whole hours to bill for a stay.
///
/// # Arguments
///
/// * `entry` - When the vehicle entered
/// * `exit` - When the vehicle left (may precede `entry`)
#[must_use]
pub fn billed_hours(entry: PrimitiveDateTime, exit: PrimitiveDateTime) -> u64 {
    let elapsed: Duration = exit - entry;
    if elapsed <= Duration::ZERO {
        return 0;
    }

    let seconds: u64 = elapsed.whole_seconds().unsigned_abs();
    let partial: bool = seconds % SECONDS_PER_HOUR != 0 || elapsed.subsec_nanoseconds() != 0;
    seconds / SECONDS_PER_HOUR + u64::from(partial)
}

/// Returns the fee for a number of billed hours.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn compute_fee(category: VehicleCategory, billed_hours: u64) -> f64 {
    billed_hours as f64 * category.hourly_rate()
}

/// Computes the full charge for a stay.
#[must_use]
pub fn quote(
    category: VehicleCategory,
    entry: PrimitiveDateTime,
    exit: PrimitiveDateTime,
) -> Charge {
    let billed_hours: u64 = billed_hours(entry, exit);
    Charge {
        billed_hours,
        fee: compute_fee(category, billed_hours),
    }
}
