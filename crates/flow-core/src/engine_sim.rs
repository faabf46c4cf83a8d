use crate::bounds::{MAX_RPM, MIN_RPM};
use crate::feed::RpmSource;

/// Marine engine whose speed lags the throttle with first-order dynamics.
#[derive(Debug, Clone)]
pub struct SimulatedEngine {
    speed_rpm: f64,
    target_rpm: f64,
    time_constant_s: f64,
}

impl SimulatedEngine {
    pub fn new(time_constant_s: f64) -> Self {
        Self {
            speed_rpm: 0.0,
            target_rpm: 0.0,
            time_constant_s: time_constant_s.max(f64::EPSILON),
        }
    }

    pub fn starting_at(rpm: f64, time_constant_s: f64) -> Self {
        let rpm = rpm.clamp(MIN_RPM, MAX_RPM);
        Self {
            speed_rpm: rpm,
            target_rpm: rpm,
            ..Self::new(time_constant_s)
        }
    }

    /// Jump straight to `rpm` and hold it there.
    pub fn reset_to(&mut self, rpm: f64) {
        if rpm.is_finite() {
            let rpm = rpm.clamp(MIN_RPM, MAX_RPM);
            self.speed_rpm = rpm;
            self.target_rpm = rpm;
        }
    }

    pub fn target_rpm(&self) -> f64 {
        self.target_rpm
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new(1.5)
    }
}

impl RpmSource for SimulatedEngine {
    fn step(&mut self, dt_s: f64) {
        let error = self.target_rpm - self.speed_rpm;
        self.speed_rpm += error * (1.0 - (-dt_s.max(0.0) / self.time_constant_s).exp());
        self.speed_rpm = self.speed_rpm.clamp(MIN_RPM, MAX_RPM);
    }

    fn read_rpm(&self) -> f64 {
        self.speed_rpm
    }

    fn set_throttle(&mut self, target_rpm: f64) {
        if target_rpm.is_finite() {
            self.target_rpm = target_rpm.clamp(MIN_RPM, MAX_RPM);
        }
    }

    fn is_healthy(&self) -> bool {
        self.speed_rpm.is_finite() && self.speed_rpm >= MIN_RPM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_toward_throttle() {
        let mut engine = SimulatedEngine::default();
        engine.set_throttle(3000.0);
        for _ in 0..1000 {
            engine.step(0.05);
        }
        assert!((engine.read_rpm() - 3000.0).abs() < 1.0);
        assert!(engine.is_healthy());
    }

    #[test]
    fn moves_monotonically_without_overshoot() {
        let mut engine = SimulatedEngine::starting_at(4000.0, 0.8);
        engine.set_throttle(1000.0);
        let mut last = engine.read_rpm();
        for _ in 0..200 {
            engine.step(0.02);
            let rpm = engine.read_rpm();
            assert!(rpm <= last);
            assert!(rpm >= 1000.0);
            last = rpm;
        }
    }

    #[test]
    fn reset_jumps_without_lag() {
        let mut engine = SimulatedEngine::starting_at(800.0, 2.0);
        engine.reset_to(3600.0);
        assert_eq!(engine.read_rpm(), 3600.0);
        engine.step(0.5);
        assert_eq!(engine.read_rpm(), 3600.0);
        engine.reset_to(f64::INFINITY);
        assert_eq!(engine.read_rpm(), 3600.0);
        engine.reset_to(-10.0);
        assert_eq!(engine.target_rpm(), 0.0);
    }

    #[test]
    fn throttle_is_clamped_and_never_negative() {
        let mut engine = SimulatedEngine::default();
        engine.set_throttle(-500.0);
        engine.step(10.0);
        assert_eq!(engine.read_rpm(), 0.0);
        engine.set_throttle(9000.0);
        assert_eq!(engine.target_rpm(), 6000.0);
        engine.set_throttle(f64::NAN);
        assert_eq!(engine.target_rpm(), 6000.0);
    }
}
