// Brand endpoints
//
// All brand routes are privileged (`/admin/brands`). Create and update
// are multipart because a logo may be attached.

use tracing::debug;

use crate::client::{AdminClient, page_params};
use crate::error::Error;
use crate::form::{BrandForm, METHOD_OVERRIDE};
use crate::models::{Brand, DataEnvelope, ListEnvelope, Page};

impl AdminClient {
    /// List one page of brands.
    ///
    /// `GET /admin/brands?page={page}&per_page={per_page}`
    pub async fn list_brands(&self, page: u32, per_page: u32) -> Result<Page<Brand>, Error> {
        let url = self.admin_url("brands")?;
        debug!(page, per_page, "listing brands");
        let envelope: ListEnvelope<Brand> = self
            .get_with_params(url, &page_params(page, per_page))
            .await?;
        Ok(Page::new(page, per_page, envelope.into_items()))
    }

    /// Fetch a single brand.
    ///
    /// `GET /admin/brands/{id}`
    pub async fn get_brand(&self, id: u64) -> Result<Brand, Error> {
        let url = self.admin_url(&format!("brands/{id}"))?;
        let envelope: DataEnvelope<Brand> = self.get(url).await?;
        Ok(envelope.data)
    }

    /// Create a brand. The server assigns the id.
    ///
    /// `POST /admin/brands` (multipart: name, status, logo)
    pub async fn create_brand(&self, form: &BrandForm) -> Result<Brand, Error> {
        let url = self.admin_url("brands")?;
        debug!(name = %form.name, "creating brand");
        let envelope: DataEnvelope<Brand> =
            self.post_multipart(url, form.to_multipart()?).await?;
        Ok(envelope.data)
    }

    /// Update a brand.
    ///
    /// `POST /admin/brands/{id}` (multipart + `_method=PUT`)
    pub async fn update_brand(&self, id: u64, form: &BrandForm) -> Result<Brand, Error> {
        let url = self.admin_url(&format!("brands/{id}"))?;
        debug!(id, "updating brand");
        let (key, value) = METHOD_OVERRIDE;
        let body = form.to_multipart()?.text(key, value);
        let envelope: DataEnvelope<Brand> = self.post_multipart(url, body).await?;
        Ok(envelope.data)
    }

    /// Delete a brand.
    ///
    /// `DELETE /admin/brands/{id}`
    pub async fn delete_brand(&self, id: u64) -> Result<(), Error> {
        let url = self.admin_url(&format!("brands/{id}"))?;
        debug!(id, "deleting brand");
        self.delete(url).await
    }
}
