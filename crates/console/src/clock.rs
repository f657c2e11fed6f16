// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Duration, PrimitiveDateTime};

/// The manually advanced simulation clock.
///
/// Time only moves when [`SimulationClock::advance`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    now: PrimitiveDateTime,
}

impl SimulationClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub const fn new(start: PrimitiveDateTime) -> Self {
        Self { now: start }
    }

    /// Returns the current simulation time.
    #[must_use]
    pub const fn now(&self) -> PrimitiveDateTime {
        self.now
    }

    /// Moves the clock forward and returns the new time.
    ///
    /// Saturates at the latest representable time.
    pub fn advance(&mut self, hours: u32, minutes: u32) -> PrimitiveDateTime {
        let step: Duration =
            Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes));
        self.now = self.now.checked_add(step).unwrap_or(PrimitiveDateTime::MAX);
        self.now
    }
}
