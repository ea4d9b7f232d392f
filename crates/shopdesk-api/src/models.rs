// Wire types for the admin API.
//
// The backend is loose about scalar encodings (prices as strings,
// booleans as "1"/"0"), so the `de` helpers below accept either form.
// Field names follow the wire format exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── Pagination ───────────────────────────────────────────────────────

/// One page of a listing, as returned by the server.
///
/// The backend does not report a total count, so callers infer whether
/// more pages exist from `items.len() == per_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(page: u32, per_page: u32, items: Vec<T>) -> Self {
        Self {
            page,
            per_page,
            items,
        }
    }

    /// `true` when the server filled the page completely.
    pub fn is_full(&self) -> bool {
        usize::try_from(self.per_page).is_ok_and(|per_page| self.items.len() >= per_page)
    }
}

// ── Envelopes ────────────────────────────────────────────────────────

/// `{ "data": ... }` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "data": [ ... ] }` where `data` may be missing or null.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// `{ "data": { "<key>": [ ... ] } }` shapes (products, notifications).
#[derive(Debug, Deserialize)]
pub(crate) struct NestedListEnvelope<T> {
    pub data: Option<NestedList<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NestedList<T> {
    #[serde(alias = "products", alias = "notifications")]
    pub items: Option<Vec<T>>,
}

impl<T> NestedListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.and_then(|d| d.items).unwrap_or_default()
    }
}

// ── Brand ────────────────────────────────────────────────────────────

/// Brand activation state.
///
/// Listings report `"active"` / `"inactive"`; forms submit `"1"` / `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BrandStatus {
    #[default]
    #[strum(to_string = "active", serialize = "1")]
    Active,
    #[strum(to_string = "inactive", serialize = "0")]
    Inactive,
}

impl BrandStatus {
    /// Value submitted in multipart forms.
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

impl Serialize for BrandStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BrandStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if de::lenient_bool(deserializer)? {
            Ok(Self::Active)
        } else {
            Ok(Self::Inactive)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: u64,
    pub brand_name: String,
    #[serde(default)]
    pub brand_slug: Option<String>,
    #[serde(default)]
    pub brand_status: BrandStatus,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

// ── Product ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: u64,
    /// Public URL of the image.
    pub file_name: String,
}

/// `{ id, name }` reference to a brand or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub small_desc: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub sku: String,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub has_discount: bool,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub discount: Option<String>,
    #[serde(default)]
    pub start_discount: Option<String>,
    #[serde(default)]
    pub end_discount: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub brand: Option<Reference>,
    #[serde(default)]
    pub category: Option<Reference>,
}

impl Product {
    /// Discount as a number; unparseable or missing discounts count as zero.
    pub fn discount_amount(&self) -> f64 {
        de::parse_amount(self.discount.as_deref())
    }
}

// ── Notification ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `{ "data": { "notification": { ... } } }`
#[derive(Debug, Deserialize)]
pub(crate) struct SentNotification {
    pub notification: Notification,
}

// ── Lenient scalar decoding ──────────────────────────────────────────

pub(crate) mod de {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v.abs() > f64::EPSILON)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "active" | "on" => Ok(true),
                "0" | "false" | "no" | "inactive" | "off" | "" => Ok(false),
                other => Err(D::Error::custom(format!("not a boolean flag: {other:?}"))),
            },
            other => Err(D::Error::custom(format!("not a boolean flag: {other}"))),
        }
    }

    pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0.0),
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom("number out of range")),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid number {s:?}: {e}"))),
            other => Err(D::Error::custom(format!("expected a number, got {other}"))),
        }
    }

    pub fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| D::Error::custom(format!("not a count: {n}"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid count {s:?}: {e}"))),
            other => Err(D::Error::custom(format!("expected a count, got {other}"))),
        }
    }

    pub fn lenient_opt_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(D::Error::custom(format!("expected a string, got {other}"))),
        }
    }

    pub fn parse_amount(raw: Option<&str>) -> f64 {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn brand_status_accepts_words_and_flags() {
        for (raw, expected) in [
            (json!("active"), BrandStatus::Active),
            (json!("1"), BrandStatus::Active),
            (json!(1), BrandStatus::Active),
            (json!(true), BrandStatus::Active),
            (json!("inactive"), BrandStatus::Inactive),
            (json!("0"), BrandStatus::Inactive),
            (json!(0), BrandStatus::Inactive),
        ] {
            let status: BrandStatus = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(status, expected, "decoding {raw}");
        }
    }

    #[test]
    fn brand_status_serializes_as_word() {
        assert_eq!(
            serde_json::to_value(BrandStatus::Inactive).unwrap(),
            json!("inactive")
        );
        assert_eq!(BrandStatus::Active.as_form_value(), "1");
        assert_eq!("0".parse::<BrandStatus>().unwrap(), BrandStatus::Inactive);
    }

    #[test]
    fn product_decodes_loose_scalars() {
        let product: Product = serde_json::from_value(json!({
            "id": 12,
            "name": "Desk Lamp",
            "sku": "LMP-1",
            "quantity": "40",
            "price": "19.90",
            "has_discount": "1",
            "discount": 5,
            "images": [{ "id": 1, "file_name": "https://cdn/lamp.png" }],
            "brand": { "id": 3, "name": "Acme" },
            "category": { "id": 9, "name": "Lighting" }
        }))
        .unwrap();

        assert_eq!(product.quantity, 40);
        assert!((product.price - 19.9).abs() < f64::EPSILON);
        assert!(product.has_discount);
        assert_eq!(product.discount.as_deref(), Some("5"));
        assert!((product.discount_amount() - 5.0).abs() < f64::EPSILON);
        assert_eq!(product.brand.unwrap().name, "Acme");
    }

    #[test]
    fn product_tolerates_missing_optionals() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Bare", "price": 3 })).unwrap();
        assert!(product.images.is_empty());
        assert!(product.brand.is_none());
        assert!(!product.has_discount);
        assert!((product.discount_amount()).abs() < f64::EPSILON);
    }

    #[test]
    fn list_envelope_null_data_is_empty() {
        let env: ListEnvelope<Brand> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(env.into_items().is_empty());

        let env: NestedListEnvelope<Product> = serde_json::from_value(json!({})).unwrap();
        assert!(env.into_items().is_empty());
    }

    #[test]
    fn nested_envelopes_decode_for_every_resource() {
        let env: NestedListEnvelope<Product> = serde_json::from_value(json!({
            "data": { "products": [{ "id": 4, "name": "Mug", "price": "2.00" }] }
        }))
        .unwrap();
        assert_eq!(env.into_items()[0].id, 4);

        let env: NestedListEnvelope<Notification> =
            serde_json::from_value(json!({ "data": { "notifications": null } })).unwrap();
        assert!(env.into_items().is_empty());

        let env: ListEnvelope<Brand> = serde_json::from_value(json!({})).unwrap();
        assert!(env.into_items().is_empty());
    }

    #[test]
    fn page_fullness() {
        assert!(Page::new(1, 2, vec![1, 2]).is_full());
        assert!(!Page::new(1, 2, vec![1]).is_full());
    }
}
