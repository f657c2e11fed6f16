// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, Outcome};
use crate::error::CoreError;
use crate::facility::Facility;

/// Applies a command to the facility.
///
/// # Arguments
///
/// * `facility` - The facility to mutate
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Outcome)` describing the transition
/// * `Err(CoreError)` if the command was rejected; the facility is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - The facility is full or the plate is already parked (`Enter`)
/// - The plate is not parked (`Exit`)
pub fn apply(facility: &mut Facility, command: Command) -> Result<Outcome, CoreError> {
    match command {
        Command::Enter { vehicle } => {
            let spot = facility.enter(vehicle)?;
            Ok(Outcome::Parked { spot })
        }
        Command::Exit { plate, exit_time } => {
            let payment = facility.exit(&plate, exit_time)?;
            Ok(Outcome::Departed(payment))
        }
        Command::ResetDay => {
            let cleared: usize = facility.ledger().len();
            facility.reset_day();
            Ok(Outcome::DayReset { cleared })
        }
    }
}
