use serde::{Deserialize, Serialize};

/// A point on Earth. Serialized as `{ "lat": .., "lng": .. }`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MotelResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
}

/// Body returned by `GET /api/motels`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MotelsResponse {
    pub results: Vec<MotelResult>,
}

impl MotelsResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
