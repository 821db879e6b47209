//! Payouts.
//!
//! `create` is the only mutation in the client that reports its outcome to
//! the end user, through the client's [`Notifier`](crate::Notifier).

use tracing::instrument;

use marketplace_core::{Paginated, Payout, PayoutId, PayoutInput, PayoutStatus};

use super::ListParams;
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/payouts`.
#[derive(Debug, Clone, Copy)]
pub struct Payouts<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Payouts<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /payouts`, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        params: &ListParams,
        status: Option<PayoutStatus>,
    ) -> Result<Paginated<Payout>, ApiError> {
        let label = status.map(|s| s.as_str());
        let key = params.key("payouts").with(label);
        let request = params
            .apply(ApiRequest::get("/payouts"))
            .query_opt("status", label);
        self.client
            .query(key, self.client.http().send(request))
            .await
    }

    /// `GET /payouts/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(&self, id: impl Into<Option<PayoutId>>) -> Result<Option<Payout>, ApiError> {
        let Some(id) = id.into().filter(PayoutId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("payout").with(id.as_i64()),
                ApiRequest::get(format!("/payouts/{id}")),
            )
            .await
            .map(Some)
    }

    /// `POST /payouts`. Notifies on success and on failure.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(receiver_type = ?input.receiver_type))]
    pub async fn create(&self, input: &PayoutInput) -> Result<Payout, ApiError> {
        let result: Result<Payout, ApiError> = async {
            let request = ApiRequest::post("/payouts").json(input)?;
            self.client
                .mutate(request, &[QueryKey::new("payouts")])
                .await
        }
        .await;

        match &result {
            Ok(_) => self.client.notifier().success("Payout created successfully"),
            Err(e) => self
                .client
                .notifier()
                .error(&format!("Failed to create payout: {}", failure_message(e))),
        }

        result
    }

    /// `PUT /payouts/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: PayoutId, input: &PayoutInput) -> Result<Payout, ApiError> {
        let request = ApiRequest::put(format!("/payouts/{id}")).json(input)?;
        self.client
            .mutate(
                request,
                &[QueryKey::new("payouts"), QueryKey::new("payout").with(id.as_i64())],
            )
            .await
    }

    /// `DELETE /payouts/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PayoutId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!("/payouts/{id}")),
                &[QueryKey::new("payouts")],
            )
            .await
    }
}

/// Server-provided message when there is one, otherwise the error itself.
fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
