// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::LicensePlate;

/// Validates that a facility capacity is usable.
///
/// # Arguments
///
/// * `capacity` - The requested number of spots
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if the capacity is zero.
pub const fn validate_capacity(capacity: u32) -> Result<(), DomainError> {
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Validates that a plate is not already parked.
///
/// This function checks uniqueness against the plates currently occupying
/// spots. Comparison is case-insensitive because plates are normalized.
///
/// # Arguments
///
/// * `parked` - Plates currently occupying spots
/// * `plate` - The plate requesting entry
///
/// # Errors
///
/// Returns `DomainError::DuplicatePlate` if the plate is already parked.
pub fn validate_plate_not_parked<'a, I>(parked: I, plate: &LicensePlate) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a LicensePlate>,
{
    if parked.into_iter().any(|p| p == plate) {
        return Err(DomainError::DuplicatePlate {
            plate: plate.value().to_string(),
        });
    }
    Ok(())
}
