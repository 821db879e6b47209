//! Support mailboxes.
//!
//! `list` resolves to the bare items. `delete` does not invalidate the list.

use tracing::instrument;

use marketplace_core::{MailboxId, Paginated, SupportMailbox, SupportMailboxInput};

use super::ListParams;
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/support-mailbox`.
#[derive(Debug, Clone, Copy)]
pub struct SupportMailboxes<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> SupportMailboxes<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /support-mailbox`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Vec<SupportMailbox>, ApiError> {
        let request = params.apply(ApiRequest::get("/support-mailbox"));
        let fetch = async {
            let page: Paginated<SupportMailbox> = self.client.http().send(request).await?;
            Ok::<_, ApiError>(page.into_items())
        };
        self.client.query(params.key("support-mailbox"), fetch).await
    }

    /// `GET /support-mailbox/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        id: impl Into<Option<MailboxId>>,
    ) -> Result<Option<SupportMailbox>, ApiError> {
        let Some(id) = id.into().filter(MailboxId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("support-mailbox-item").with(id.as_i64()),
                ApiRequest::get(format!("/support-mailbox/{id}")),
            )
            .await
            .map(Some)
    }

    /// `POST /support-mailbox`. Invalidates mailbox lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &SupportMailboxInput) -> Result<SupportMailbox, ApiError> {
        let request = ApiRequest::post("/support-mailbox").json(input)?;
        self.client
            .mutate(request, &[QueryKey::new("support-mailbox")])
            .await
    }

    /// `DELETE /support-mailbox/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: MailboxId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(ApiRequest::delete(format!("/support-mailbox/{id}")), &[])
            .await
    }
}
