//! Product - Catalog Record and Its Typed Decoder
//!
//! Records arrive from the catalog as untyped JSON objects. [`decode_product`]
//! turns one into a [`Product`] field by field; extra fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use snafu::Snafu;
use std::fmt;
use std::sync::Arc;

/// Stable product identifier within a session
///
/// Any JSON number is a valid id, so the catalog's representation is kept as is.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProductId(pub Number);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(Number::from(id))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: Arc<str>,
    pub description: Arc<str>,
    /// Non-negative price in the catalog currency
    pub price: f64,
    /// Thumbnail URI
    pub thumbnail: Arc<str>,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Uppercased first character of the title, used for the thumbnail tile
    pub fn initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Why a record could not be turned into a [`Product`]
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum ValidationError {
    #[snafu(display("record is not an object"))]
    NotAnObject,

    #[snafu(display("missing field `{field}`"))]
    MissingField { field: &'static str },

    #[snafu(display("field `{field}` should be {expected}"))]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[snafu(display("price must be non-negative, got {value}"))]
    NegativePrice { value: f64 },
}

/// Decode an untyped catalog record into a [`Product`]
pub fn decode_product(record: &Value) -> Result<Product, ValidationError> {
    let Some(object) = record.as_object() else {
        return Err(ValidationError::NotAnObject);
    };

    let id = field(object, "id")?
        .as_number()
        .cloned()
        .ok_or(ValidationError::WrongType {
            field: "id",
            expected: "a number",
        })?;
    let title = string_field(object, "title")?;
    let description = string_field(object, "description")?;
    let price = field(object, "price")?
        .as_f64()
        .ok_or(ValidationError::WrongType {
            field: "price",
            expected: "a number",
        })?;
    if price < 0.0 {
        return Err(ValidationError::NegativePrice { value: price });
    }
    let thumbnail = string_field(object, "thumbnail")?;

    Ok(Product {
        id: ProductId(id),
        title,
        description,
        price,
        thumbnail,
    })
}

fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, ValidationError> {
    match object.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field: name }),
        Some(value) => Ok(value),
    }
}

fn string_field(object: &Map<String, Value>, name: &'static str) -> Result<Arc<str>, ValidationError> {
    field(object, name)?
        .as_str()
        .map(Arc::from)
        .ok_or(ValidationError::WrongType {
            field: name,
            expected: "a string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "id": 7,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "price": 9.99,
            "thumbnail": "https://cdn.dummyjson.com/products/images/7/thumbnail.png",
            "rating": 4.94,
            "tags": ["beauty", "mascara"]
        })
    }

    #[test]
    fn test_decode_valid_record_ignores_extra_fields() {
        let product = decode_product(&record()).expect("valid record");
        assert_eq!(product.id, ProductId::from(7));
        assert_eq!(&*product.title, "Essence Mascara Lash Princess");
        assert_eq!(product.price, 9.99);
        assert_eq!(
            &*product.thumbnail,
            "https://cdn.dummyjson.com/products/images/7/thumbnail.png"
        );
    }

    #[test]
    fn test_decode_missing_price() {
        let mut value = record();
        value.as_object_mut().expect("object").remove("price");
        assert_eq!(
            decode_product(&value),
            Err(ValidationError::MissingField { field: "price" })
        );
    }

    #[test]
    fn test_decode_wrong_types() {
        let mut value = record();
        value["title"] = json!(42);
        assert_eq!(
            decode_product(&value),
            Err(ValidationError::WrongType {
                field: "title",
                expected: "a string"
            })
        );

        let mut value = record();
        value["price"] = json!("9.99");
        assert!(matches!(
            decode_product(&value),
            Err(ValidationError::WrongType { field: "price", .. })
        ));
    }

    #[test]
    fn test_decode_null_counts_as_missing() {
        let mut value = record();
        value["thumbnail"] = Value::Null;
        assert_eq!(
            decode_product(&value),
            Err(ValidationError::MissingField { field: "thumbnail" })
        );
    }

    #[test]
    fn test_decode_rejects_negative_price_and_non_objects() {
        let mut value = record();
        value["price"] = json!(-1.5);
        assert_eq!(
            decode_product(&value),
            Err(ValidationError::NegativePrice { value: -1.5 })
        );
        assert_eq!(decode_product(&json!([1, 2])), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_any_numeric_id_is_accepted() {
        let mut value = record();
        value["id"] = json!(7.0);
        let product = decode_product(&value).expect("float id");
        assert_eq!(product.id.to_string(), "7.0");

        value["id"] = json!(u64::MAX);
        let product = decode_product(&value).expect("large id");
        assert_eq!(product.id, ProductId::from(u64::MAX));

        value["id"] = json!("7");
        assert_eq!(
            decode_product(&value),
            Err(ValidationError::WrongType {
                field: "id",
                expected: "a number"
            })
        );
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let mut value = record();
        value["price"] = json!(10);
        let product = decode_product(&value).expect("valid record");
        assert_eq!(product.display_price(), "$10.00");
        assert_eq!(product.initial(), "E");
    }
}
