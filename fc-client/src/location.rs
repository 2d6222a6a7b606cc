/// A geographical position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Provides the current position of the device, if the
/// platform supports it and the user permits it.
pub trait Locator: Send + Sync {
    fn current_position(&self) -> Option<Position>;
}

/// The fallback for platforms without location services.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl Locator for NoLocation {
    fn current_position(&self) -> Option<Position> {
        None
    }
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Position);

impl Locator for FixedLocation {
    fn current_position(&self) -> Option<Position> {
        Some(self.0)
    }
}
