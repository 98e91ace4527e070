use serde::Serialize;

/// Geolocation attached to a time entry.
///
/// Persisted as the `"lat,lon"` text payload the mobile clients send.
/// The aggregation core never interprets it; it is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }

    /// Convert DB string → GeoPoint
    pub fn from_db_str(s: &str) -> Option<Self> {
        let (lat, lon) = s.split_once(',')?;
        Some(Self {
            lat: lat.trim().parse().ok()?,
            lon: lon.trim().parse().ok()?,
        })
    }
}
