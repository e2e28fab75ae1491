use crate::domain::property::{join_address, Property};
use serde_json::Value;

// RentCast /properties record (fields we read)
//  ├── id
//  ├── formattedAddress
//  ├── addressLine1 / address
//  ├── city, state, zipCode
//  ├── price, rentEstimate
//  ├── rentEstimates
//  │    └── amount
//  ├── bedrooms, bathrooms, squareFootage, yearBuilt
//  ├── latitude, longitude
//  └── propertyType
//
// Records are read as raw `Value`s: a field only counts as numeric when the
// JSON value is a number, so "1200" or null stay unset.

/// Pulls the record list out of a response body.
/// Accepts `{ "properties": [...] }` or a bare array; anything else is empty.
pub fn extract_records(body: &Value) -> &[Value] {
    if let Some(list) = body.get("properties").and_then(Value::as_array) {
        return list;
    }
    body.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Maps one raw record. `index` feeds the placeholder id when the record has none.
pub fn map_record(record: &Value, index: usize) -> Property {
    let address_line1 = string_field(record, "addressLine1");
    let city = string_field(record, "city").unwrap_or_default();
    let state = string_field(record, "state").unwrap_or_default();
    let zip_code = zip_field(record);

    let formatted_address = string_field(record, "formattedAddress").or_else(|| {
        let joined = join_address(&[
            address_line1.as_deref().unwrap_or(""),
            &city,
            &state,
            &zip_code,
        ]);
        (!joined.is_empty()).then_some(joined)
    });

    let id = match record.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("rc-{index}"),
    };

    let rent_estimate = number_field(record, "rentEstimate").or_else(|| {
        record
            .get("rentEstimates")
            .and_then(|r| r.get("amount"))
            .and_then(Value::as_f64)
    });

    Property {
        id,
        address: address_line1
            .or_else(|| string_field(record, "address"))
            .unwrap_or_default(),
        city,
        state,
        zip_code,
        price: number_field(record, "price"),
        rent_estimate,
        bedrooms: number_field(record, "bedrooms"),
        bathrooms: number_field(record, "bathrooms"),
        square_footage: number_field(record, "squareFootage"),
        year_built: number_field(record, "yearBuilt"),
        latitude: number_field(record, "latitude"),
        longitude: number_field(record, "longitude"),
        property_type: string_field(record, "propertyType"),
        formatted_address,
    }
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number_field(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

// ZIPs sometimes arrive as numbers.
fn zip_field(record: &Value) -> String {
    match record.get("zipCode") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
