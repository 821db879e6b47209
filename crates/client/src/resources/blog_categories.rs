//! Blog categories for the storefront blog.
//!
//! Creation is a multipart upload so a cover image can ride along.

use reqwest::multipart::{Form, Part};
use tracing::instrument;

use marketplace_core::{BlogCategory, BlogCategoryId, BlogCategoryInput};

use super::all_query;
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/blog-categories`.
#[derive(Debug, Clone, Copy)]
pub struct BlogCategories<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> BlogCategories<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /blog-categories/all`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn all(&self, search: Option<&str>) -> Result<Vec<BlogCategory>, ApiError> {
        let (key, request) = all_query("blog-categories", "/blog-categories/all", search);
        self.client.query_data(key, request).await
    }

    /// `GET /blog-categories/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        id: impl Into<Option<BlogCategoryId>>,
    ) -> Result<Option<BlogCategory>, ApiError> {
        let Some(id) = id.into().filter(BlogCategoryId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("blog-category").with(id.as_i64()),
                ApiRequest::get(format!("/blog-categories/{id}")),
            )
            .await
            .map(Some)
    }

    /// `POST /blog-categories` as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: BlogCategoryInput) -> Result<BlogCategory, ApiError> {
        let request = ApiRequest::post("/blog-categories").multipart(blog_category_form(input));
        self.client
            .mutate(request, &[QueryKey::new("blog-categories")])
            .await
    }

    /// `DELETE /blog-categories/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: BlogCategoryId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!("/blog-categories/{id}")),
                &[QueryKey::new("blog-categories")],
            )
            .await
    }
}

fn blog_category_form(input: BlogCategoryInput) -> Form {
    let BlogCategoryInput {
        name,
        slug,
        description,
        image,
    } = input;

    let mut form = Form::new().text("name", name);
    if let Some(slug) = slug {
        form = form.text("slug", slug);
    }
    if let Some(description) = description {
        form = form.text("description", description);
    }
    if let Some((file_name, bytes)) = image {
        form = form.part("image", Part::bytes(bytes).file_name(file_name));
    }
    form
}
