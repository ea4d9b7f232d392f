// Product endpoints
//
// Listing wraps items one level deeper than brands:
// `{ "data": { "products": [ ... ] } }`.

use tracing::debug;

use crate::client::{AdminClient, page_params};
use crate::error::Error;
use crate::form::{METHOD_OVERRIDE, ProductForm};
use crate::models::{DataEnvelope, NestedListEnvelope, Page, Product};

impl AdminClient {
    /// List one page of products.
    ///
    /// `GET /admin/products?page={page}&per_page={per_page}`
    pub async fn list_products(&self, page: u32, per_page: u32) -> Result<Page<Product>, Error> {
        let url = self.admin_url("products")?;
        debug!(page, per_page, "listing products");
        let envelope: NestedListEnvelope<Product> = self
            .get_with_params(url, &page_params(page, per_page))
            .await?;
        Ok(Page::new(page, per_page, envelope.into_items()))
    }

    /// Fetch a single product with its images, brand, and category.
    ///
    /// `GET /admin/products/{id}`
    pub async fn get_product(&self, id: u64) -> Result<Product, Error> {
        let url = self.admin_url(&format!("products/{id}"))?;
        let envelope: DataEnvelope<Product> = self.get(url).await?;
        Ok(envelope.data)
    }

    /// Create a product.
    ///
    /// `POST /admin/products` (multipart, images as `images[]`)
    pub async fn create_product(&self, form: &ProductForm) -> Result<Product, Error> {
        let url = self.admin_url("products")?;
        debug!(name = %form.name, sku = %form.sku, images = form.images.len(), "creating product");
        let envelope: DataEnvelope<Product> =
            self.post_multipart(url, form.to_multipart()?).await?;
        Ok(envelope.data)
    }

    /// Update a product.
    ///
    /// `POST /admin/products/{id}` (multipart + `_method=PUT`)
    pub async fn update_product(&self, id: u64, form: &ProductForm) -> Result<Product, Error> {
        let url = self.admin_url(&format!("products/{id}"))?;
        debug!(id, "updating product");
        let (key, value) = METHOD_OVERRIDE;
        let body = form.to_multipart()?.text(key, value);
        let envelope: DataEnvelope<Product> = self.post_multipart(url, body).await?;
        Ok(envelope.data)
    }

    /// Delete a product.
    ///
    /// `DELETE /admin/products/{id}`
    pub async fn delete_product(&self, id: u64) -> Result<(), Error> {
        let url = self.admin_url(&format!("products/{id}"))?;
        debug!(id, "deleting product");
        self.delete(url).await
    }
}
