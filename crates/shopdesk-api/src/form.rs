// Multipart form payloads for create / update calls.
//
// Forms are borrowed when encoded so a caller can keep the draft around
// (and resubmit it) after a failed request.

use std::fmt;
use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::error::Error;
use crate::models::BrandStatus;

/// Field added to update bodies so the backend treats the POST as a PUT.
pub(crate) const METHOD_OVERRIDE: (&str, &str) = ("_method", "PUT");

// ── MediaFile ────────────────────────────────────────────────────────

/// A binary attachment (brand logo, product image).
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first()
            .map(|mime| mime.essence_str().to_owned());
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read an attachment from disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    fn to_part(&self, field: &str) -> Result<Part, Error> {
        let part = Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        match self.mime_type.as_deref() {
            Some(mime) => part.mime_str(mime).map_err(|e| Error::InvalidForm {
                field: field.to_owned(),
                reason: format!("bad MIME type {mime:?}: {e}"),
            }),
            None => Ok(part),
        }
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// ── Brand ────────────────────────────────────────────────────────────

/// Create / update payload for a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandForm {
    pub name: String,
    pub status: BrandStatus,
    /// New logo; `None` keeps the current one on update.
    pub logo: Option<MediaFile>,
}

impl BrandForm {
    pub(crate) fn to_multipart(&self) -> Result<Form, Error> {
        let mut form = Form::new()
            .text("name", self.name.clone())
            .text("status", self.status.as_form_value());
        if let Some(ref logo) = self.logo {
            form = form.part("logo", logo.to_part("logo")?);
        }
        Ok(form)
    }
}

// ── Product ──────────────────────────────────────────────────────────

/// Create / update payload for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub small_desc: String,
    pub desc: String,
    pub sku: String,
    pub price: f64,
    pub quantity: u32,
    pub has_discount: bool,
    pub discount: Option<String>,
    pub start_discount: Option<String>,
    pub end_discount: Option<String>,
    pub brand_id: u64,
    pub category_id: u64,
    /// Images to attach, sent as repeated `images[]` parts.
    pub images: Vec<MediaFile>,
}

impl ProductForm {
    /// Set the discount and derive `has_discount` from it (any positive
    /// amount turns the flag on).
    pub fn with_discount(mut self, discount: Option<String>) -> Self {
        self.has_discount = crate::models::de::parse_amount(discount.as_deref()) > 0.0;
        self.discount = discount;
        self
    }

    pub(crate) fn to_multipart(&self) -> Result<Form, Error> {
        let mut form = Form::new()
            .text("name", self.name.clone())
            .text("small_desc", self.small_desc.clone())
            .text("desc", self.desc.clone())
            .text("sku", self.sku.clone())
            .text("price", self.price.to_string())
            .text("quantity", self.quantity.to_string())
            .text("has_discount", if self.has_discount { "1" } else { "0" })
            .text("brand_id", self.brand_id.to_string())
            .text("category_id", self.category_id.to_string());

        for (field, value) in [
            ("discount", &self.discount),
            ("start_discount", &self.start_discount),
            ("end_discount", &self.end_discount),
        ] {
            if let Some(v) = value {
                form = form.text(field, v.clone());
            }
        }

        for image in &self.images {
            form = form.part("images[]", image.to_part("images[]")?);
        }
        Ok(form)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_form() -> ProductForm {
        ProductForm {
            name: "Lamp".into(),
            small_desc: "Small".into(),
            desc: "Long".into(),
            sku: "LMP-1".into(),
            price: 19.5,
            quantity: 3,
            has_discount: false,
            discount: None,
            start_discount: None,
            end_discount: None,
            brand_id: 1,
            category_id: 2,
            images: Vec::new(),
        }
    }

    #[test]
    fn mime_guessed_from_extension() {
        assert_eq!(
            MediaFile::new("logo.PNG", vec![1]).mime_type.as_deref(),
            Some("image/png")
        );
        assert!(MediaFile::new("README", vec![]).mime_type.is_none());
    }

    #[test]
    fn mime_covers_less_common_image_types() {
        for (name, mime) in [
            ("logo.bmp", "image/bmp"),
            ("scan.tiff", "image/tiff"),
            ("icon.ico", "image/x-icon"),
            ("photo.JPEG", "image/jpeg"),
        ] {
            assert_eq!(MediaFile::new(name, vec![]).mime_type.as_deref(), Some(mime), "{name}");
        }
    }

    #[test]
    fn media_debug_hides_bytes() {
        let dbg = format!("{:?}", MediaFile::new("a.jpg", vec![0; 1024]));
        assert!(dbg.contains("len: 1024"));
        assert!(!dbg.contains("0, 0"));
    }

    #[test]
    fn discount_drives_flag() {
        let form = product_form().with_discount(Some("2.50".into()));
        assert!(form.has_discount);

        let form = product_form().with_discount(Some("0".into()));
        assert!(!form.has_discount);

        let form = product_form().with_discount(None);
        assert!(!form.has_discount);
    }

    #[test]
    fn forms_encode_with_attachments() {
        let mut form = product_form();
        form.images = vec![MediaFile::new("a.png", vec![1, 2, 3])];
        assert!(form.to_multipart().is_ok());

        let brand = BrandForm {
            name: "Acme".into(),
            status: BrandStatus::Active,
            logo: Some(MediaFile::new("logo.svg", vec![b'<'])),
        };
        assert!(brand.to_multipart().is_ok());
    }
}
