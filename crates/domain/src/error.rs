// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A license plate was empty after trimming.
    #[error("License plate cannot be empty")]
    EmptyLicensePlate,
    /// Facility capacity must be positive.
    #[error("Invalid capacity: {capacity}. Must be greater than 0")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: u32,
    },
    /// The plate is already parked in the facility.
    #[error("Vehicle with plate '{plate}' is already parked")]
    DuplicatePlate {
        /// The normalized plate.
        plate: String,
    },
    /// Failed to parse a timestamp.
    #[error("Failed to parse timestamp '{input}': {error}")]
    TimestampParseError {
        /// The rejected input.
        input: String,
        /// The parser's message.
        error: String,
    },
}
