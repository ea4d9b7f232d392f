// ── Resource item shapes ──
//
// The list store and mutation coordinator are generic over the item
// type. `Resource` is the small amount of knowledge they need: a stable
// id and a way to seed an edit draft from the current attributes.

use std::fmt::Debug;

use shopdesk_api::{Brand, BrandForm, Product, ProductForm};

/// A server-managed entity exposed through a CRUD-shaped REST path.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Editable attribute set submitted on update.
    type Draft: Clone + Debug + Send + Sync + 'static;

    /// Human-readable singular name (`"brand"`, `"product"`).
    const KIND: &'static str;

    /// Server-assigned identifier. Immutable for the item's lifetime.
    fn id(&self) -> u64;

    /// Seed an update draft from the item's current attributes.
    fn to_draft(&self) -> Self::Draft;
}

impl Resource for Brand {
    type Draft = BrandForm;
    const KIND: &'static str = "brand";

    fn id(&self) -> u64 {
        self.brand_id
    }

    fn to_draft(&self) -> BrandForm {
        BrandForm {
            name: self.brand_name.clone(),
            status: self.brand_status,
            logo: None,
        }
    }
}

impl Resource for Product {
    type Draft = ProductForm;
    const KIND: &'static str = "product";

    fn id(&self) -> u64 {
        self.id
    }

    /// Existing images stay on the server; the draft only carries new ones.
    fn to_draft(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            small_desc: self.small_desc.clone().unwrap_or_default(),
            desc: self.desc.clone().unwrap_or_default(),
            sku: self.sku.clone(),
            price: self.price,
            quantity: self.quantity,
            has_discount: false,
            discount: None,
            start_discount: self.start_discount.clone(),
            end_discount: self.end_discount.clone(),
            brand_id: self.brand.as_ref().map_or(0, |b| b.id),
            category_id: self.category.as_ref().map_or(0, |c| c.id),
            images: Vec::new(),
        }
        .with_discount(self.discount.clone())
    }
}
