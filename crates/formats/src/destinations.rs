use foundation::math::GeoPoint;
use serde::Deserialize;
use serde_json::Value;

/// One destination record from the data file, field names as shipped in the
/// asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl DestinationRecord {
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug)]
pub enum DestinationsError {
    Parse(String),
    NotAnArray,
    InvalidRecord { index: usize, reason: String },
}

impl std::fmt::Display for DestinationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestinationsError::Parse(reason) => write!(f, "JSON parse error: {reason}"),
            DestinationsError::NotAnArray => write!(f, "expected a JSON array of records"),
            DestinationsError::InvalidRecord { index, reason } => {
                write!(f, "invalid record at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for DestinationsError {}

pub fn destinations_from_json_str(
    payload: &str,
) -> Result<Vec<DestinationRecord>, DestinationsError> {
    let root: Value =
        serde_json::from_str(payload).map_err(|e| DestinationsError::Parse(e.to_string()))?;
    let items = root.as_array().ok_or(DestinationsError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record: DestinationRecord = serde_json::from_value(item.clone()).map_err(|e| {
            DestinationsError::InvalidRecord {
                index,
                reason: e.to_string(),
            }
        })?;

        if !(-90.0..=90.0).contains(&record.latitude) {
            return Err(DestinationsError::InvalidRecord {
                index,
                reason: format!("latitude {} out of [-90, 90]", record.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&record.longitude) {
            return Err(DestinationsError::InvalidRecord {
                index,
                reason: format!("longitude {} out of [-180, 180]", record.longitude),
            });
        }

        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{DestinationsError, destinations_from_json_str};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_records_in_order() {
        let payload = r#"[
            {"name": "Paris", "latitude": 48.8566, "longitude": 2.3522},
            {"latitude": -33.8688, "longitude": 151.2093}
        ]"#;
        let records = destinations_from_json_str(payload).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Paris"));
        assert_eq!(records[0].geo().lat_deg, 48.8566);
        assert_eq!(records[1].name, None);
        assert_eq!(records[1].geo().lon_deg, 151.2093);
    }

    #[test]
    fn missing_longitude_reports_the_row() {
        let payload = r#"[
            {"name": "Paris", "latitude": 48.8566, "longitude": 2.3522},
            {"name": "Nowhere", "latitude": 1.0}
        ]"#;
        match destinations_from_json_str(payload) {
            Err(DestinationsError::InvalidRecord { index: 1, reason }) => {
                assert!(reason.contains("longitude"), "unhelpful reason: {reason}");
            }
            other => panic!("expected row-indexed error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_domain_latitude_is_rejected() {
        let payload = r#"[{"latitude": 91.0, "longitude": 0.0}]"#;
        assert!(matches!(
            destinations_from_json_str(payload),
            Err(DestinationsError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn top_level_object_is_rejected() {
        assert!(matches!(
            destinations_from_json_str(r#"{"latitude": 0.0}"#),
            Err(DestinationsError::NotAnArray)
        ));
    }
}
