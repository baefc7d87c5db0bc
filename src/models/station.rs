use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Station {
    #[serde(skip_serializing, default)]
    pub id: i64,

    #[validate(length(min = 1))]
    pub station: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,
}

impl Station {
    pub fn new(
        id: i64,
        station: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            id,
            station,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_station_validation() {
        let station = Station::new(
            7,
            "USC00519281".to_string(),
            "WAIHEE 837.5, HI US".to_string(),
            21.45167,
            -157.84889,
            32.9,
        );

        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let station = Station::new(
            1,
            "USC00000000".to_string(),
            "Nowhere".to_string(),
            91.0, // Invalid latitude
            -157.8,
            0.0,
        );

        assert!(station.validate().is_err());
    }

    #[test]
    fn test_serialized_fields() {
        let station = Station::new(
            1,
            "USC00519397".to_string(),
            "WAIKIKI 717.2, HI US".to_string(),
            21.2716,
            -157.8168,
            3.0,
        );

        let value = serde_json::to_value(&station).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "station": "USC00519397",
                "name": "WAIKIKI 717.2, HI US",
                "latitude": 21.2716,
                "longitude": -157.8168,
                "elevation": 3.0
            })
        );
    }
}
