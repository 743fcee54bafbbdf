// RouterOS REST client
//
// Wraps `reqwest::Client` with the REST root (`{base}/rest/`), basic auth,
// and RouterOS error decoding. Resource endpoints are inherent methods
// implemented in `crate::resources`, one file per menu.

use reqwest::{Method, RequestBuilder, StatusCode};
use routeros_model::Query;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::Credentials;
use crate::error::{Error, RemoteError};
use crate::transport::TransportConfig;

const BODY_PREVIEW_LEN: usize = 200;

/// Everything needed to open a connection to one router.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Router root, e.g. `https://192.168.88.1`. `/rest` is appended.
    pub base_url: Url,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

impl ClientConfig {
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            transport: TransportConfig::default(),
        }
    }
}

/// Async client for the RouterOS REST API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    rest_url: Url,
    credentials: Credentials,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with its own `reqwest::Client` from `config.transport`.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Self::with_client(&config.base_url, config.credentials.clone(), http)
    }

    /// Wrap an existing `reqwest::Client`. Its timeout and TLS settings are
    /// used as-is.
    pub fn with_client(
        base_url: &Url,
        credentials: Credentials,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            rest_url: rest_root(base_url)?,
            credentials,
        })
    }

    /// The REST root every resource path is joined onto.
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a menu path (e.g. `"ip/arp"`) onto the REST root.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.rest_url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url).basic_auth(
            self.credentials.username(),
            Some(self.credentials.password().expose_secret()),
        )
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.request(Method::GET, url).send().await?;
        handle_response(resp).await
    }

    /// `POST {path}/print` with a `.query` body.
    pub(crate) async fn print<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>, Error> {
        let url = self.url(&format!("{path}/print"))?;
        debug!(filters = query.len(), "POST {url}");

        let resp = self.request(Method::POST, url).json(query).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.request(Method::PUT, url).json(body).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.request(Method::PATCH, url).json(body).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.request(Method::DELETE, url).send().await?;
        handle_empty(resp).await
    }
}

/// Normalize a router root to `{root}/rest/`. A root that already ends in
/// `/rest` is kept.
fn rest_root(base_url: &Url) -> Result<Url, Error> {
    if base_url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }

    let mut url = base_url.clone();
    let path = url.path().trim_end_matches('/').to_owned();
    if path.ends_with("/rest") {
        url.set_path(&format!("{path}/"));
    } else {
        url.set_path(&format!("{path}/rest/"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    trace!(%status, "response");
    if !status.is_success() {
        return Err(parse_error(status, resp).await);
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(BODY_PREVIEW_LEN).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

/// Success without a body to decode (`204 No Content` from `DELETE`).
async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    trace!(%status, "response");
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();

    if let Ok(remote) = serde_json::from_str::<RemoteError>(&raw) {
        return Error::Remote(remote);
    }

    warn!(%status, "router error body is not in the RouterOS error shape");
    let message = if raw.is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_owned()
    } else {
        raw
    };
    Error::Remote(RemoteError {
        code: status.as_u16(),
        message,
        detail: None,
    })
}
