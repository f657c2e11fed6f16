// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parking_sim_domain::{LicensePlate, Payment, SpotNumber, Vehicle};
use time::PrimitiveDateTime;

/// A command represents caller intent as data only.
///
/// Commands are the only way the console requests state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Park a vehicle in the first available spot.
    Enter {
        /// The arriving vehicle.
        vehicle: Vehicle,
    },
    /// Release a parked vehicle and bill its stay.
    Exit {
        /// The plate to release.
        plate: LicensePlate,
        /// Simulation time of departure.
        exit_time: PrimitiveDateTime,
    },
    /// Start a new day by clearing the daily ledger.
    ResetDay,
}

/// The result of a successfully applied command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The vehicle was parked.
    Parked {
        /// The spot it occupies.
        spot: SpotNumber,
    },
    /// The vehicle left and was billed.
    Departed(Payment),
    /// The daily ledger was cleared.
    DayReset {
        /// Number of sessions removed from the ledger.
        cleared: usize,
    },
}
