// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    MORNING, create_filled_facility, create_test_car, create_test_facility, create_test_van,
    plate,
};
use crate::{CoreError, Facility};
use parking_sim_domain::{DomainError, SpotNumber};

#[test]
fn test_new_facility_is_empty() {
    let facility: Facility = create_test_facility(5);

    assert_eq!(facility.capacity(), 5);
    assert_eq!(facility.available_count(), 5);
    assert_eq!(facility.occupied_count(), 0);
    assert!(!facility.is_full());
    assert_eq!(facility.spots().len(), 5);
    assert_eq!(facility.spots()[0].number(), SpotNumber::new(1));
    assert_eq!(facility.spots()[4].number(), SpotNumber::new(5));
}

#[test]
fn test_zero_capacity_rejected() {
    let result: Result<Facility, CoreError> = Facility::new(0);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidCapacity {
            capacity: 0
        }))
    );
}

#[test]
fn test_enter_uses_lowest_free_spot() {
    let mut facility: Facility = create_test_facility(3);

    let first = facility.enter(create_test_car("AAA111", MORNING)).unwrap();
    let second = facility.enter(create_test_van("BBB222", MORNING)).unwrap();

    assert_eq!(first, SpotNumber::new(1));
    assert_eq!(second, SpotNumber::new(2));
    assert_eq!(facility.available_count(), 1);
}

#[test]
fn test_fill_to_capacity_then_reject() {
    let capacity: u32 = 4;
    let mut facility: Facility =
        create_filled_facility(capacity, &["AAA111", "BBB222", "CCC333", "DDD444"]);

    assert_eq!(facility.available_count(), 0);
    assert!(facility.is_full());

    let result = facility.enter(create_test_car("EEE555", MORNING));
    assert_eq!(result, Err(CoreError::FacilityFull { capacity }));
    assert!(!facility.is_parked(&plate("EEE555")));
    assert_eq!(facility.occupied_count(), 4);
}

#[test]
fn test_duplicate_plate_rejected() {
    let mut facility: Facility = create_filled_facility(3, &["AAA111"]);

    let result = facility.enter(create_test_van("aaa111", MORNING));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicatePlate {
            plate: String::from("AAA111"),
        }))
    );
    assert_eq!(facility.available_count(), 2);
}

#[test]
fn test_full_reported_before_duplicate() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    let result = facility.enter(create_test_car("AAA111", MORNING));

    assert_eq!(result, Err(CoreError::FacilityFull { capacity: 1 }));
}

#[test]
fn test_vacated_spot_is_reused() {
    let mut facility: Facility = create_filled_facility(3, &["AAA111", "BBB222", "CCC333"]);

    facility.exit(&plate("BBB222"), MORNING).unwrap();
    let spot = facility.enter(create_test_car("DDD444", MORNING)).unwrap();

    assert_eq!(spot, SpotNumber::new(2));
    assert!(facility.is_full());
}

#[test]
fn test_plate_can_reenter_after_exit() {
    let mut facility: Facility = create_filled_facility(2, &["AAA111"]);

    facility.exit(&plate("AAA111"), MORNING).unwrap();

    assert!(facility.enter(create_test_car("AAA111", MORNING)).is_ok());
}
