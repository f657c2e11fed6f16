// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::VehicleCategory;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Wall-clock layout used for every rendered or parsed timestamp.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(timestamp: PrimitiveDateTime) -> String {
    timestamp
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Parses a timestamp in `YYYY-MM-DD HH:MM:SS` form.
///
/// # Errors
///
/// Returns `DomainError::TimestampParseError` if the input does not match the layout.
pub fn parse_timestamp(input: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(input.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        DomainError::TimestampParseError {
            input: input.to_string(),
            error: e.to_string(),
        }
    })
}

/// A vehicle license plate.
///
/// Plates are trimmed and normalized to uppercase, so two plates that differ
/// only in case compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicensePlate {
    value: String,
}

impl LicensePlate {
    /// Creates a new `LicensePlate`.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw plate text (will be trimmed and uppercased)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLicensePlate` if nothing remains after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyLicensePlate);
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the normalized plate value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for LicensePlate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LicensePlate> for String {
    fn from(plate: LicensePlate) -> Self {
        plate.value
    }
}

impl std::str::FromStr for LicensePlate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A vehicle requesting or holding a spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    plate: LicensePlate,
    entry_time: PrimitiveDateTime,
    category: VehicleCategory,
}

impl Vehicle {
    /// Creates a new `Vehicle`.
    ///
    /// # Arguments
    ///
    /// * `category` - The vehicle category
    /// * `plate` - The license plate
    /// * `entry_time` - Simulation time at which the vehicle arrived
    #[must_use]
    pub const fn new(
        category: VehicleCategory,
        plate: LicensePlate,
        entry_time: PrimitiveDateTime,
    ) -> Self {
        Self {
            plate,
            entry_time,
            category,
        }
    }

    /// Returns the license plate.
    #[must_use]
    pub const fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    /// Returns the entry time.
    #[must_use]
    pub const fn entry_time(&self) -> PrimitiveDateTime {
        self.entry_time
    }

    /// Replaces the entry time, allowing a vehicle value to be re-used across simulated visits.
    pub const fn set_entry_time(&mut self, entry_time: PrimitiveDateTime) {
        self.entry_time = entry_time;
    }

    /// Returns the vehicle category.
    #[must_use]
    pub const fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Returns the hourly rate for this vehicle's category.
    #[must_use]
    pub const fn hourly_rate(&self) -> f64 {
        self.category.hourly_rate()
    }

    /// Returns the label for this vehicle's category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [plate: {}]", self.label(), self.plate)
    }
}

/// The 1-based number of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotNumber(u32);

impl SpotNumber {
    /// Creates a new `SpotNumber`.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpotNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A completed park-and-pay cycle.
///
/// Sessions are produced only when a vehicle exits and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    plate: LicensePlate,
    category: VehicleCategory,
    entry_time: PrimitiveDateTime,
    exit_time: PrimitiveDateTime,
    fee: f64,
}

impl Session {
    /// Creates a new `Session`.
    #[must_use]
    pub const fn new(
        plate: LicensePlate,
        category: VehicleCategory,
        entry_time: PrimitiveDateTime,
        exit_time: PrimitiveDateTime,
        fee: f64,
    ) -> Self {
        Self {
            plate,
            category,
            entry_time,
            exit_time,
            fee,
        }
    }

    /// Returns the license plate.
    #[must_use]
    pub const fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    /// Returns the vehicle category.
    #[must_use]
    pub const fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Returns the vehicle type label recorded for this session.
    #[must_use]
    pub const fn vehicle_type(&self) -> &'static str {
        self.category.label()
    }

    /// Returns the entry time.
    #[must_use]
    pub const fn entry_time(&self) -> PrimitiveDateTime {
        self.entry_time
    }

    /// Returns the exit time.
    #[must_use]
    pub const fn exit_time(&self) -> PrimitiveDateTime {
        self.exit_time
    }

    /// Returns the fee charged.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }
}

/// The result of a successful exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The session recorded for this exit.
    pub session: Session,
    /// Parked duration rounded up to whole hours.
    pub billed_hours: u64,
    /// The amount due.
    pub fee: f64,
}
