// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Facility;
use parking_sim_domain::{LicensePlate, Vehicle, VehicleCategory};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const MORNING: PrimitiveDateTime = datetime!(2026-03-02 10:00:00);

pub fn plate(value: &str) -> LicensePlate {
    LicensePlate::new(value).unwrap()
}

pub fn create_test_car(value: &str, entry_time: PrimitiveDateTime) -> Vehicle {
    Vehicle::new(VehicleCategory::Car, plate(value), entry_time)
}

pub fn create_test_van(value: &str, entry_time: PrimitiveDateTime) -> Vehicle {
    Vehicle::new(VehicleCategory::DeliveryVan, plate(value), entry_time)
}

pub fn create_test_facility(capacity: u32) -> Facility {
    Facility::new(capacity).unwrap()
}

/// Builds a facility with `plates` parked as cars at `MORNING`, in order.
pub fn create_filled_facility(capacity: u32, plates: &[&str]) -> Facility {
    let mut facility: Facility = create_test_facility(capacity);
    for value in plates {
        facility.enter(create_test_car(value, MORNING)).unwrap();
    }
    facility
}
