//! crates/device/src/output.rs
//! Normalized setpoint output that drives a motor's voltage.

use std::fmt;
use std::sync::Weak;

use crate::motor::Motor;

/// Full-scale motor command in millivolts.
pub const MAX_MILLIVOLTS: i32 = 12_000;

/// Sink for the value a controller computes on each iteration.
pub trait ControllerOutput {
    /// Applies a controller value.
    fn controller_set(&self, value: f64);
}

/// Scales a normalized setpoint onto the ±[`MAX_MILLIVOLTS`] range.
///
/// The setpoint is clamped to `[-1, 1]` and NaN is treated as zero.
///
/// # Examples
///
/// ```
/// use device::setpoint_to_millivolts;
///
/// assert_eq!(setpoint_to_millivolts(0.5), 6000);
/// assert_eq!(setpoint_to_millivolts(-3.0), -12_000);
/// ```
#[must_use]
pub fn setpoint_to_millivolts(setpoint: f64) -> i32 {
    if setpoint.is_nan() {
        return 0;
    }
    // Bounded by MAX_MILLIVOLTS after the clamp.
    (setpoint.clamp(-1.0, 1.0) * f64::from(MAX_MILLIVOLTS)).round() as i32
}

/// Controller output that turns normalized setpoints into motor voltage.
///
/// Obtained through [`Motor::voltage_output`]; each motor owns exactly one.
pub struct VoltageControllerOutput {
    motor: Weak<dyn Motor>,
}

impl VoltageControllerOutput {
    pub(crate) fn new(motor: Weak<dyn Motor>) -> Self {
        Self { motor }
    }

    /// Reports whether the motor this output drives still exists.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.motor.strong_count() > 0
    }
}

impl ControllerOutput for VoltageControllerOutput {
    /// Commands the motor with `setpoint` scaled by [`setpoint_to_millivolts`].
    ///
    /// Does nothing once the motor has been dropped.
    fn controller_set(&self, setpoint: f64) {
        let Some(motor) = self.motor.upgrade() else {
            tracing::debug!(target: "ctrlkit::device", "voltage output outlived its motor");
            return;
        };
        let millivolts = setpoint_to_millivolts(setpoint);
        tracing::trace!(target: "ctrlkit::device", setpoint, millivolts, "moving motor");
        motor.move_voltage(millivolts);
    }
}

impl fmt::Debug for VoltageControllerOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoltageControllerOutput")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_setpoint_is_half_scale() {
        assert_eq!(setpoint_to_millivolts(0.5), 6000);
        assert_eq!(setpoint_to_millivolts(-0.5), -6000);
    }

    #[test]
    fn extremes_reach_full_scale() {
        assert_eq!(setpoint_to_millivolts(1.0), MAX_MILLIVOLTS);
        assert_eq!(setpoint_to_millivolts(-1.0), -MAX_MILLIVOLTS);
        assert_eq!(setpoint_to_millivolts(0.0), 0);
    }

    #[test]
    fn out_of_range_setpoints_are_clamped() {
        assert_eq!(setpoint_to_millivolts(2.5), MAX_MILLIVOLTS);
        assert_eq!(setpoint_to_millivolts(f64::NEG_INFINITY), -MAX_MILLIVOLTS);
    }

    #[test]
    fn nan_is_zero() {
        assert_eq!(setpoint_to_millivolts(f64::NAN), 0);
    }

    #[test]
    fn rounds_to_nearest_millivolt() {
        assert_eq!(setpoint_to_millivolts(0.000_04), 0);
        assert_eq!(setpoint_to_millivolts(0.000_05), 1);
    }

    #[test]
    fn detached_output_debug() {
        let motor: Weak<dyn Motor> = Weak::<Detached>::new();
        let output = VoltageControllerOutput::new(motor);
        assert!(!output.is_attached());
        assert_eq!(format!("{output:?}"), "VoltageControllerOutput { attached: false }");
        output.controller_set(0.5);
    }

    struct Detached;

    impl Motor for Detached {
        fn move_voltage(&self, _millivolts: i32) {
            unreachable!("never upgraded");
        }

        fn output_slot(&self) -> &crate::OutputSlot {
            unreachable!("never upgraded");
        }
    }
}
