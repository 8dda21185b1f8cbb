use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Asset every hospital card shows.
pub const HOSPITAL_IMAGE: &str = "images/hospital.webp";

/// One item as returned by the hospitals endpoint.
///
/// Decoding never fails: a missing or oddly-typed field (or an array entry
/// that isn't an object at all) degrades to an empty display value instead
/// of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RawHospital {
    pub hospital_id: Option<Value>,
    pub name: Option<Value>,
    pub street_address: Option<Value>,
    pub city: Option<Value>,
    pub zip_code: Option<Value>,
    pub phone: Option<Value>,
    pub hospital_bed_count: Option<Value>,
}

impl From<Value> for RawHospital {
    fn from(value: Value) -> Self {
        let field = |key: &str| value.get(key).filter(|v| !v.is_null()).cloned();
        RawHospital {
            hospital_id: field("hospital_id"),
            name: field("name"),
            street_address: field("street_address"),
            city: field("city"),
            zip_code: field("zip_code"),
            phone: field("phone"),
            hospital_bed_count: field("hospital_bed_count"),
        }
    }
}

/// Display-ready hospital record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: Option<String>,
    pub bed_count: Option<u32>,
    pub image: String,
}

impl Hospital {
    /// Bed count as shown on the card; empty when the source had none.
    pub fn beds_display(&self) -> String {
        self.bed_count.map(|b| b.to_string()).unwrap_or_default()
    }
}

impl From<RawHospital> for Hospital {
    fn from(raw: RawHospital) -> Self {
        let text = |field: &Option<Value>| field.as_ref().map(value_text).unwrap_or_default();

        let city = text(&raw.city);
        let zip_code = text(&raw.zip_code);
        let street = text(&raw.street_address);
        let phone = text(&raw.phone);

        Hospital {
            id: text(&raw.hospital_id),
            name: text(&raw.name),
            address: join_address(&street, &city, &zip_code),
            city,
            zip_code,
            phone: Some(phone).filter(|p| !p.trim().is_empty()),
            bed_count: raw.hospital_bed_count.as_ref().and_then(value_count),
            image: HOSPITAL_IMAGE.to_string(),
        }
    }
}

/// Map a fetched list. Order is preserved.
pub fn map_hospitals(raw: Vec<RawHospital>) -> Vec<Hospital> {
    raw.into_iter().map(Hospital::from).collect()
}

/// "123 Main St, New York 10001", skipping whatever parts are blank.
fn join_address(street: &str, city: &str, zip: &str) -> String {
    let locality = [city.trim(), zip.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    [street.trim(), locality.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a scalar JSON value as text; arrays and objects become empty.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn value_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
