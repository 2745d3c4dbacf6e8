use serde::{Deserialize, Serialize};

use super::de::deserialize_decimal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Plan {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: String,
    /// Length of the subscription, in days
    pub duration: i64,
}

/// Body for creating or updating a plan
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlanInput {
    pub name: String,
    pub price: String,
    pub duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_string_or_number() {
        let a: Plan =
            serde_json::from_str(r#"{"id":1,"name":"Monthly","price":"19.99","duration":30}"#)
                .expect("string price");
        let b: Plan =
            serde_json::from_str(r#"{"id":2,"name":"Yearly","price":199.5,"duration":365}"#)
                .expect("numeric price");
        assert_eq!(a.price, "19.99");
        assert_eq!(b.price, "199.50");
    }
}
