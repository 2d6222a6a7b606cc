use std::fmt;

/// A geographical position in decimal degrees (WGS84).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    const LAT_MAX: f64 = 90.0;
    const LNG_MAX: f64 = 180.0;

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let res = Self {
            lat: lat.into(),
            lng: lng.into(),
        };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let res = Self {
            lat: lat.into(),
            lng: lng.into(),
        };
        res.is_valid().then_some(res)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= Self::LAT_MAX
            && self.lng.abs() <= Self::LNG_MAX
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Great-circle distance on the surface of the earth
    /// using the Haversine formula.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding errors may push `a` slightly out of [0, 1]
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c))
    }
}
