//! Integration tests for the per-motor voltage controller output.
//!
//! These tests drive [`device::VoltageControllerOutput`] through the shared
//! [`MockMotor`] double and check the single-instance and scaling contracts.

use std::sync::Arc;

use device::{ControllerOutput, MAX_MILLIVOLTS, Motor, setpoint_to_millivolts};
use proptest::prelude::*;
use test_support::MockMotor;

// ============================================================================
// Single Instance
// ============================================================================

/// Verifies a motor hands out the same output object on every request.
#[test]
fn one_voltage_output_per_motor() {
    let motor = MockMotor::new();
    let first = motor.voltage_output();
    let second = motor.voltage_output();
    assert!(Arc::ptr_eq(&first, &second));
}

/// Verifies dropping every output handle does not reset the memoized one.
#[test]
fn output_survives_caller_handles() {
    let motor = MockMotor::new();
    let first = Arc::as_ptr(&motor.voltage_output());
    let second = Arc::as_ptr(&motor.voltage_output());
    assert_eq!(first, second);
}

// ============================================================================
// Scaling
// ============================================================================

/// Verifies a half setpoint commands half of full scale.
#[test]
fn sets_motor_voltage() {
    let motor = MockMotor::new();
    motor.voltage_output().controller_set(0.5);
    assert_eq!(motor.last_voltage(), 6000);
    assert_eq!(motor.commands(), 1);
}

/// Verifies saturated setpoints stop at full scale.
#[test]
fn saturates_at_full_scale() {
    let motor = MockMotor::new();
    let output = motor.voltage_output();

    output.controller_set(4.0);
    assert_eq!(motor.last_voltage(), MAX_MILLIVOLTS);

    output.controller_set(-4.0);
    assert_eq!(motor.last_voltage(), -MAX_MILLIVOLTS);
}

/// Verifies a dropped motor silently ignores further setpoints.
#[test]
fn orphaned_output_is_inert() {
    let motor = MockMotor::new();
    let output = motor.voltage_output();
    drop(motor);

    assert!(!output.is_attached());
    output.controller_set(0.5);
}

proptest! {
    /// Verifies every finite setpoint lands inside the motor's range.
    #[test]
    fn millivolts_stay_in_range(setpoint in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let millivolts = setpoint_to_millivolts(setpoint);
        prop_assert!((-MAX_MILLIVOLTS..=MAX_MILLIVOLTS).contains(&millivolts));
    }

    /// Verifies scaling preserves the setpoint's sign.
    #[test]
    fn scaling_preserves_sign(setpoint in -1.0f64..=1.0) {
        let millivolts = setpoint_to_millivolts(setpoint);
        if setpoint > 0.0 {
            prop_assert!(millivolts >= 0);
        } else {
            prop_assert!(millivolts <= 0);
        }
    }
}
