// ── Resource data sources ──
//
// The seam between list state and HTTP. `ApiSource` forwards to the
// admin client; tests substitute an in-memory source.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use shopdesk_api::{AdminClient, Brand, BrandForm, Page, Product, ProductForm};

use crate::error::CoreError;
use crate::model::Resource;

/// CRUD operations for one resource type.
pub trait ResourceSource: Send + Sync + 'static {
    type Item: Resource;

    fn list(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Page<Self::Item>, CoreError>> + Send;

    fn get(&self, id: u64) -> impl Future<Output = Result<Self::Item, CoreError>> + Send;

    fn create(
        &self,
        draft: &<Self::Item as Resource>::Draft,
    ) -> impl Future<Output = Result<Self::Item, CoreError>> + Send;

    fn update(
        &self,
        id: u64,
        draft: &<Self::Item as Resource>::Draft,
    ) -> impl Future<Output = Result<Self::Item, CoreError>> + Send;

    fn delete(&self, id: u64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// [`ResourceSource`] backed by the admin REST client.
pub struct ApiSource<T> {
    client: Arc<AdminClient>,
    _item: PhantomData<fn() -> T>,
}

impl<T> ApiSource<T> {
    pub fn new(client: Arc<AdminClient>) -> Self {
        Self {
            client,
            _item: PhantomData,
        }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }
}

impl ResourceSource for ApiSource<Brand> {
    type Item = Brand;

    async fn list(&self, page: u32, per_page: u32) -> Result<Page<Brand>, CoreError> {
        Ok(self.client.list_brands(page, per_page).await?)
    }

    async fn get(&self, id: u64) -> Result<Brand, CoreError> {
        Ok(self.client.get_brand(id).await?)
    }

    async fn create(&self, draft: &BrandForm) -> Result<Brand, CoreError> {
        Ok(self.client.create_brand(draft).await?)
    }

    async fn update(&self, id: u64, draft: &BrandForm) -> Result<Brand, CoreError> {
        Ok(self.client.update_brand(id, draft).await?)
    }

    async fn delete(&self, id: u64) -> Result<(), CoreError> {
        Ok(self.client.delete_brand(id).await?)
    }
}

impl ResourceSource for ApiSource<Product> {
    type Item = Product;

    async fn list(&self, page: u32, per_page: u32) -> Result<Page<Product>, CoreError> {
        Ok(self.client.list_products(page, per_page).await?)
    }

    async fn get(&self, id: u64) -> Result<Product, CoreError> {
        Ok(self.client.get_product(id).await?)
    }

    async fn create(&self, draft: &ProductForm) -> Result<Product, CoreError> {
        Ok(self.client.create_product(draft).await?)
    }

    async fn update(&self, id: u64, draft: &ProductForm) -> Result<Product, CoreError> {
        Ok(self.client.update_product(id, draft).await?)
    }

    async fn delete(&self, id: u64) -> Result<(), CoreError> {
        Ok(self.client.delete_product(id).await?)
    }
}
