//! Record types listed and managed by the back office

use serde::{Deserialize, Deserializer, Serialize, de};

/// One car record as served by the backend.
///
/// `id` is unique within a listing and is the key used both for navigation
/// to the edit form and for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier
    pub id: i64,

    /// Manufacturer brand
    pub brand: String,

    /// Model name
    pub model: String,

    /// Body color
    pub color: String,

    /// Year of manufacture
    pub year_manufacture: i32,

    /// Imported flag, stored as a string; `"1"` means imported
    pub imported: String,

    /// License plate string
    pub plates: String,

    /// Selling price; the backend serializes decimals either as a JSON
    /// number or as a string, both are accepted here
    #[serde(deserialize_with = "deserialize_price")]
    pub selling_price: f64,
}

impl Car {
    /// Whether the record is flagged as imported
    #[must_use]
    pub fn is_imported(&self) -> bool {
        self.imported == "1"
    }

    /// Brand and model joined for display
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Number(f64),
        Text(String),
    }

    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(value) => Ok(value),
        PriceRepr::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid decimal string {text:?}: {e}"))),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json(price: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "brand": "Fiat",
                "model": "Uno",
                "color": "Vermelho",
                "year_manufacture": 1998,
                "imported": "0",
                "plates": "ABC-1234",
                "selling_price": {price}
            }}"#
        )
    }

    #[test]
    fn test_deserialize_numeric_price() {
        let car: Car = serde_json::from_str(&sample_json("15990.5")).unwrap();
        assert_eq!(car.id, 7);
        assert_eq!(car.brand, "Fiat");
        assert!((car.selling_price - 15990.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_string_price() {
        let car: Car = serde_json::from_str(&sample_json("\"15990.50\"")).unwrap();
        assert!((car.selling_price - 15990.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_rejects_garbage_price() {
        let result = serde_json::from_str::<Car>(&sample_json("\"muito caro\""));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_emits_numeric_price() {
        let car: Car = serde_json::from_str(&sample_json("\"1000\"")).unwrap();
        let value = serde_json::to_value(&car).unwrap();
        assert!(value["selling_price"].is_number());
    }

    #[test]
    fn test_imported_flag() {
        let mut car: Car = serde_json::from_str(&sample_json("1.0")).unwrap();
        assert!(!car.is_imported());

        car.imported = "1".to_string();
        assert!(car.is_imported());

        // Only the exact string "1" counts
        car.imported = "true".to_string();
        assert!(!car.is_imported());
    }

    #[test]
    fn test_display_name_joins_brand_and_model() {
        let car: Car = serde_json::from_str(&sample_json("1.0")).unwrap();
        assert_eq!(car.display_name(), "Fiat Uno");
    }

    #[test]
    fn test_list_order_is_preserved() {
        let json = format!(
            "[{},{},{}]",
            sample_json("1").replace("\"id\": 7", "\"id\": 3"),
            sample_json("1").replace("\"id\": 7", "\"id\": 1"),
            sample_json("1").replace("\"id\": 7", "\"id\": 2")
        );
        let cars: Vec<Car> = serde_json::from_str(&json).unwrap();
        let ids: Vec<i64> = cars.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
