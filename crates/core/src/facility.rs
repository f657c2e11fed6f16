// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The facility state manager.
//!
//! A [`Facility`] owns its spots, the daily ledger of completed sessions and
//! the per-plate history. Callers receive read-only views; the only mutators
//! are [`Facility::enter`], [`Facility::exit`] and [`Facility::reset_day`].
//!
//! ## Invariants
//!
//! - Spots are numbered `1..=capacity` and never added or removed
//! - A plate occupies at most one spot at a time
//! - Sessions are only produced by `exit`
//! - `reset_day` clears the ledger but never the history

use crate::error::CoreError;
use crate::report::DailyReport;
use parking_sim_domain::{
    Charge, LicensePlate, Payment, Session, SpotNumber, Vehicle, format_timestamp, quote,
    validate_capacity, validate_plate_not_parked,
};
use std::collections::BTreeMap;
use time::PrimitiveDateTime;
use tracing::{debug, info, warn};

/// A single numbered parking spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    number: SpotNumber,
    occupant: Option<Vehicle>,
}

impl Spot {
    const fn new(number: SpotNumber) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    /// Returns the spot number.
    #[must_use]
    pub const fn number(&self) -> SpotNumber {
        self.number
    }

    /// Returns the parked vehicle, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Returns whether a vehicle is parked here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    fn occupied(&self) -> Option<OccupiedSpot<'_>> {
        self.occupant.as_ref().map(|vehicle| OccupiedSpot {
            spot: self.number,
            vehicle,
        })
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupied() {
            Some(occupied) => write!(f, "{occupied}"),
            None => write!(f, "Spot {}: (available)", self.number),
        }
    }
}

/// A read-only view of an occupied spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedSpot<'a> {
    /// The spot number.
    pub spot: SpotNumber,
    /// The vehicle parked there.
    pub vehicle: &'a Vehicle,
}

impl std::fmt::Display for OccupiedSpot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot {}: {}, entered: {}",
            self.spot,
            self.vehicle,
            format_timestamp(self.vehicle.entry_time())
        )
    }
}

/// A single parking facility.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    capacity: u32,
    spots: Vec<Spot>,
    ledger: Vec<Session>,
    history: BTreeMap<LicensePlate, Session>,
}

impl Facility {
    /// Creates an empty facility with `capacity` spots.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: u32) -> Result<Self, CoreError> {
        validate_capacity(capacity)?;

        let spots: Vec<Spot> = (1..=capacity)
            .map(|n| Spot::new(SpotNumber::new(n)))
            .collect();

        debug!(capacity, "Created facility");

        Ok(Self {
            capacity,
            spots,
            ledger: Vec::new(),
            history: BTreeMap::new(),
        })
    }

    /// Returns the number of spots.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the number of empty spots.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|s| !s.is_occupied()).count()
    }

    /// Returns the number of occupied spots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.spots.len() - self.available_count()
    }

    /// Returns whether every spot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots.iter().all(Spot::is_occupied)
    }

    /// Returns every spot in number order.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Parks a vehicle in the lowest-numbered empty spot.
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The arriving vehicle
    ///
    /// # Returns
    ///
    /// The number of the spot the vehicle now occupies.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every spot is occupied (`CoreError::FacilityFull`)
    /// - The plate is already parked (`DomainError::DuplicatePlate`)
    pub fn enter(&mut self, vehicle: Vehicle) -> Result<SpotNumber, CoreError> {
        let Some(index) = self.spots.iter().position(|s| !s.is_occupied()) else {
            warn!(
                plate = %vehicle.plate(),
                capacity = self.capacity,
                "Entry rejected: facility full"
            );
            return Err(CoreError::FacilityFull {
                capacity: self.capacity,
            });
        };

        if let Err(err) = validate_plate_not_parked(self.parked_plates(), vehicle.plate()) {
            warn!(plate = %vehicle.plate(), "Entry rejected: plate already parked");
            return Err(err.into());
        }

        let spot: &mut Spot = &mut self.spots[index];
        info!(
            plate = %vehicle.plate(),
            category = vehicle.category().as_str(),
            spot = spot.number.get(),
            entry_time = %format_timestamp(vehicle.entry_time()),
            "Vehicle entered"
        );
        spot.occupant = Some(vehicle);
        Ok(spot.number)
    }

    /// Releases a parked vehicle and bills its stay.
    ///
    /// The session is appended to the daily ledger and replaces any earlier
    /// history entry for the plate.
    ///
    /// # Arguments
    ///
    /// * `plate` - The departing plate
    /// * `exit_time` - Simulation time of departure; an exit earlier than the
    ///   entry bills zero hours
    ///
    /// # Errors
    ///
    /// Returns `CoreError::VehicleNotFound` if no spot holds the plate.
    pub fn exit(
        &mut self,
        plate: &LicensePlate,
        exit_time: PrimitiveDateTime,
    ) -> Result<Payment, CoreError> {
        let Some(vehicle) = self
            .spots
            .iter_mut()
            .find(|s| s.occupant.as_ref().is_some_and(|v| v.plate() == plate))
            .and_then(|s| s.occupant.take())
        else {
            debug!(%plate, "Exit rejected: vehicle not found");
            return Err(CoreError::VehicleNotFound {
                plate: plate.clone(),
            });
        };

        let charge: Charge = quote(vehicle.category(), vehicle.entry_time(), exit_time);
        let session: Session = Session::new(
            vehicle.plate().clone(),
            vehicle.category(),
            vehicle.entry_time(),
            exit_time,
            charge.fee,
        );

        self.ledger.push(session.clone());
        self.history.insert(session.plate().clone(), session.clone());

        info!(
            %plate,
            billed_hours = charge.billed_hours,
            fee = charge.fee,
            "Vehicle exited"
        );

        Ok(Payment {
            session,
            billed_hours: charge.billed_hours,
            fee: charge.fee,
        })
    }

    /// Returns the spot holding `plate`, if any.
    #[must_use]
    pub fn find(&self, plate: &LicensePlate) -> Option<OccupiedSpot<'_>> {
        self.list_occupied().find(|o| o.vehicle.plate() == plate)
    }

    /// Returns whether `plate` is currently parked.
    #[must_use]
    pub fn is_parked(&self, plate: &LicensePlate) -> bool {
        self.find(plate).is_some()
    }

    /// Iterates over occupied spots in number order.
    ///
    /// Each call starts a fresh scan, so the sequence can be walked again
    /// after the facility changes.
    pub fn list_occupied(&self) -> impl Iterator<Item = OccupiedSpot<'_>> {
        self.spots.iter().filter_map(Spot::occupied)
    }

    /// Returns the sessions completed since the last reset, oldest first.
    #[must_use]
    pub fn ledger(&self) -> &[Session] {
        &self.ledger
    }

    /// Returns the most recent session recorded for `plate`.
    ///
    /// History survives [`Facility::reset_day`].
    #[must_use]
    pub fn last_session(&self, plate: &LicensePlate) -> Option<&Session> {
        self.history.get(plate)
    }

    /// Iterates over the most recent session of every plate ever billed,
    /// ordered by plate.
    pub fn history(&self) -> impl Iterator<Item = &Session> {
        self.history.values()
    }

    /// Builds the daily report from the current ledger.
    #[must_use]
    pub fn daily_report(&self) -> DailyReport {
        DailyReport::new(&self.ledger)
    }

    /// Clears the daily ledger. History is kept.
    pub fn reset_day(&mut self) {
        info!(cleared = self.ledger.len(), "Daily ledger reset");
        self.ledger.clear();
    }

    fn parked_plates(&self) -> impl Iterator<Item = &LicensePlate> {
        self.spots
            .iter()
            .filter_map(|s| s.occupant.as_ref().map(Vehicle::plate))
    }
}
