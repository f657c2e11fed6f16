// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    MORNING, create_filled_facility, create_test_car, create_test_facility, create_test_van,
    plate,
};
use crate::{CoreError, Facility};
use parking_sim_domain::{Payment, VehicleCategory};
use time::macros::datetime;

#[test]
fn test_exit_unknown_plate_returns_not_found() {
    let mut facility: Facility = create_filled_facility(3, &["AAA111"]);
    let before: Facility = facility.clone();

    let result = facility.exit(&plate("ZZZ999"), MORNING);

    assert_eq!(
        result,
        Err(CoreError::VehicleNotFound {
            plate: plate("ZZZ999"),
        })
    );
    assert_eq!(facility, before);
}

#[test]
fn test_exit_on_empty_facility_returns_not_found() {
    let mut facility: Facility = create_test_facility(2);

    assert!(matches!(
        facility.exit(&plate("AAA111"), MORNING),
        Err(CoreError::VehicleNotFound { .. })
    ));
}

#[test]
fn test_exit_one_second_bills_full_hour() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    let payment: Payment = facility
        .exit(&plate("AAA111"), datetime!(2026-03-02 10:00:01))
        .unwrap();

    assert_eq!(payment.billed_hours, 1);
    assert_eq!(payment.fee, 5.0);
}

#[test]
fn test_exit_two_hours_for_car() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    let payment: Payment = facility
        .exit(&plate("AAA111"), datetime!(2026-03-02 12:00:00))
        .unwrap();

    assert_eq!(payment.billed_hours, 2);
    assert_eq!(payment.fee, 10.0);
    assert_eq!(payment.session.fee(), 10.0);
    assert_eq!(payment.session.entry_time(), MORNING);
    assert_eq!(payment.session.exit_time(), datetime!(2026-03-02 12:00:00));
    assert_eq!(payment.session.vehicle_type(), "Car");
}

#[test]
fn test_exit_van_uses_van_rate() {
    let mut facility: Facility = create_test_facility(1);
    facility.enter(create_test_van("VAN1", MORNING)).unwrap();

    let payment: Payment = facility
        .exit(&plate("VAN1"), datetime!(2026-03-02 12:30:00))
        .unwrap();

    assert_eq!(payment.billed_hours, 3);
    assert_eq!(payment.fee, 24.0);
    assert_eq!(payment.session.category(), VehicleCategory::DeliveryVan);
}

#[test]
fn test_exit_immediately_is_free() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    let payment: Payment = facility.exit(&plate("AAA111"), MORNING).unwrap();

    assert_eq!(payment.billed_hours, 0);
    assert_eq!(payment.fee, 0.0);
}

#[test]
fn test_exit_before_entry_is_clamped_to_zero() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    let payment: Payment = facility
        .exit(&plate("AAA111"), datetime!(2026-03-02 07:00:00))
        .unwrap();

    assert_eq!(payment.billed_hours, 0);
    assert_eq!(payment.fee, 0.0);
    assert_eq!(facility.available_count(), 1);
}

#[test]
fn test_exit_matches_plate_case_insensitively() {
    let mut facility: Facility = create_test_facility(2);
    facility.enter(create_test_car("abc123", MORNING)).unwrap();

    let payment: Payment = facility
        .exit(&plate("ABC123"), datetime!(2026-03-02 11:00:00))
        .unwrap();

    assert_eq!(payment.session.plate().value(), "ABC123");
    assert_eq!(facility.available_count(), 2);
}

#[test]
fn test_exit_only_releases_matching_spot() {
    let mut facility: Facility = create_filled_facility(3, &["AAA111", "BBB222", "CCC333"]);

    facility.exit(&plate("BBB222"), MORNING).unwrap();

    assert!(facility.is_parked(&plate("AAA111")));
    assert!(!facility.is_parked(&plate("BBB222")));
    assert!(facility.is_parked(&plate("CCC333")));
    assert!(!facility.spots()[1].is_occupied());
}

#[test]
fn test_second_exit_for_same_plate_not_found() {
    let mut facility: Facility = create_filled_facility(1, &["AAA111"]);

    facility.exit(&plate("AAA111"), MORNING).unwrap();
    let result = facility.exit(&plate("AAA111"), MORNING);

    assert!(matches!(result, Err(CoreError::VehicleNotFound { .. })));
    assert_eq!(facility.ledger().len(), 1);
}

#[test]
fn test_reused_vehicle_bills_from_new_entry_time() {
    let mut facility: Facility = create_test_facility(1);
    let mut vehicle = create_test_car("AAA111", MORNING);

    facility.enter(vehicle.clone()).unwrap();
    facility
        .exit(&plate("AAA111"), datetime!(2026-03-02 11:00:00))
        .unwrap();

    vehicle.set_entry_time(datetime!(2026-03-02 15:00:00));
    facility.enter(vehicle).unwrap();
    let payment: Payment = facility
        .exit(&plate("AAA111"), datetime!(2026-03-02 15:20:00))
        .unwrap();

    assert_eq!(payment.billed_hours, 1);
    assert_eq!(payment.session.entry_time(), datetime!(2026-03-02 15:00:00));
}
