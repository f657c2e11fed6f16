// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parking_sim_domain::{DomainError, LicensePlate};
use thiserror::Error;

/// Errors that can occur during facility operations.
///
/// Every variant leaves the facility unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// No spot is available.
    #[error("Facility is full: all {capacity} spots are occupied")]
    FacilityFull {
        /// The facility capacity.
        capacity: u32,
    },
    /// No occupied spot holds the plate.
    #[error("Vehicle with plate '{plate}' was not found in the facility")]
    VehicleNotFound {
        /// The plate that was looked up.
        plate: LicensePlate,
    },
}
