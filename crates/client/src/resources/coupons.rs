//! Coupons. There is no list endpoint on this client; mutations still
//! invalidate `["coupons"]` so list views elsewhere refetch.

use tracing::instrument;

use marketplace_core::{Coupon, CouponId, CouponInput};

use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/coupons`.
#[derive(Debug, Clone, Copy)]
pub struct Coupons<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Coupons<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /coupons/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(&self, id: impl Into<Option<CouponId>>) -> Result<Option<Coupon>, ApiError> {
        let Some(id) = id.into().filter(CouponId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("coupon").with(id.as_i64()),
                ApiRequest::get(format!("/coupons/{id}")),
            )
            .await
            .map(Some)
    }

    /// `POST /coupons`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: &CouponInput) -> Result<Coupon, ApiError> {
        let request = ApiRequest::post("/coupons").json(input)?;
        self.client
            .mutate(request, &[QueryKey::new("coupons")])
            .await
    }

    /// `PUT /coupons/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: CouponId, input: &CouponInput) -> Result<Coupon, ApiError> {
        let request = ApiRequest::put(format!("/coupons/{id}")).json(input)?;
        self.client
            .mutate(
                request,
                &[QueryKey::new("coupons"), QueryKey::new("coupon").with(id.as_i64())],
            )
            .await
    }

    /// `DELETE /coupons/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CouponId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!("/coupons/{id}")),
                &[QueryKey::new("coupons")],
            )
            .await
    }
}
