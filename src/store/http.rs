//! HTTP implementation of the remote bills store.
//!
//! Receipt uploads go out as multipart form data (file + owner email), bill
//! updates as JSON. A non-success status surfaces as a store error whose
//! message is `Erreur <status>`, which is the exact text the error page
//! displays; no distinction is made between 4xx and 5xx beyond that message.

use crate::{
    entities::Bill,
    errors::{Error, Result},
    store::{BillPayload, BillStore, ReceiptUpload, StagedReceipt},
};
use async_trait::async_trait;
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use tracing::{debug, error};

/// Client for the remote bills API.
#[derive(Clone, Debug)]
pub struct HttpBillStore {
    client: Client,
    base_url: String,
}

impl HttpBillStore {
    /// Creates a client for the store rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn bill_url(&self, selector: &str) -> String {
        format!("{}/bills/{selector}", self.base_url)
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = format!("Erreur {}", status.as_u16());
            error!("Store request failed: {message}");
            Err(Error::Store { message })
        }
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        debug!("Listing bills");
        let response = self.client.get(self.bills_url()).send().await?;
        Self::check(response)?.json().await.map_err(Into::into)
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<StagedReceipt> {
        debug!("Staging receipt file '{}'", upload.file.name);
        let part = Part::bytes(upload.file.bytes)
            .file_name(upload.file.name)
            .mime_str(&upload.file.content_type)?;
        let form = Form::new().part("file", part).text("email", upload.email);

        let response = self
            .client
            .post(self.bills_url())
            .multipart(form)
            .send()
            .await?;
        Self::check(response)?.json().await.map_err(Into::into)
    }

    async fn update(&self, selector: &str, payload: &BillPayload) -> Result<Bill> {
        debug!("Updating bill '{selector}'");
        let response = self
            .client
            .patch(self.bill_url(selector))
            .json(payload)
            .send()
            .await?;
        Self::check(response)?.json().await.map_err(Into::into)
    }
}
