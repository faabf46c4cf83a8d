/// Anything that can report an engine speed: the simulated engine, or a
/// recorded trace replayed in tests.
pub trait RpmSource {
    fn step(&mut self, dt_s: f64);
    fn read_rpm(&self) -> f64;
    fn set_throttle(&mut self, target_rpm: f64);
    fn is_healthy(&self) -> bool;
}
