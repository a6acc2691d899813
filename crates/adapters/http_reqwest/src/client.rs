//! reqwest implementation of [`LibraryApi`].

use std::future::Future;

use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use libdash_app::ports::LibraryApi;
use libdash_domain::category::{Category, CategoryInput};
use libdash_domain::error::LibdashError;
use libdash_domain::id::CategoryId;
use libdash_domain::stats::DashboardStats;

use crate::config::HttpConfig;
use crate::envelope::Envelope;
use crate::error::HttpError;

const USER_AGENT: &str = concat!("libdash/", env!("CARGO_PKG_VERSION"));

/// Library API reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLibraryApi {
    client: Client,
    base_url: String,
}

impl HttpLibraryApi {
    /// Build a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Request`] when the reqwest client cannot be
    /// constructed.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        let url = self.build_url(endpoint);
        tracing::debug!(%url, "GET");
        self.client.get(url)
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        let url = self.build_url(endpoint);
        tracing::debug!(%url, "POST");
        self.client.post(url)
    }
}

/// Send `request` and unwrap the envelope it answers with.
///
/// A non-success status still yields an application or validation error when
/// its body is a `success: false` envelope; otherwise it is a transport
/// failure.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Option<T>, LibdashError> {
    let response = request.send().await.map_err(HttpError::from)?;
    let status = response.status();
    let body = response.bytes().await.map_err(HttpError::from)?;

    match serde_json::from_slice::<Envelope<T>>(&body) {
        Ok(envelope) if status.is_success() || !envelope.success => envelope.into_result(),
        Ok(_) => Err(HttpError::Status(status).into()),
        Err(_) if !status.is_success() => Err(HttpError::Status(status).into()),
        Err(err) => Err(HttpError::Decode(err).into()),
    }
}

async fn send_expecting<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, LibdashError> {
    send(request)
        .await?
        .ok_or_else(|| HttpError::MissingData.into())
}

impl LibraryApi for HttpLibraryApi {
    fn fetch_summary(&self) -> impl Future<Output = Result<DashboardStats, LibdashError>> + Send {
        send_expecting(self.get("dashboard/summary"))
    }

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, LibdashError>> + Send {
        send_expecting(self.get("categories"))
    }

    fn create_category(
        &self,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send {
        send(self.post("create/categories").json(input))
    }

    fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send {
        send(self.post(&format!("update/categories/{id}")).json(input))
    }

    fn archive_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<(), LibdashError>> + Send {
        let request = self.post(&format!("archive/categories/{id}"));
        async move {
            send::<IgnoredAny>(request).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpLibraryApi {
        HttpLibraryApi::new(&HttpConfig {
            base_url: base_url.to_string(),
            ..HttpConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn should_join_endpoint_to_base_url() {
        let api = api("http://127.0.0.1:8000/api");
        assert_eq!(
            api.build_url("dashboard/summary"),
            "http://127.0.0.1:8000/api/dashboard/summary"
        );
    }

    #[test]
    fn should_ignore_trailing_and_leading_slashes() {
        let api = api("http://127.0.0.1:8000/api/");
        assert_eq!(
            api.build_url("/categories"),
            "http://127.0.0.1:8000/api/categories"
        );
    }
}
