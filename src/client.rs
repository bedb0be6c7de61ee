//! Session layer for the NYPL Platform API.
//!
//! [`PlatformSession`] wraps a `reqwest::Client` together with a
//! [`PlatformAuth`] manager. Every query method obtains a valid bearer token
//! (requesting a new one when the held token is absent or expired), issues a
//! GET against the configured base URL and hands back the raw
//! [`reqwest::Response`] for the caller to inspect. Non-2xx statuses from the
//! bib endpoints are not turned into errors here; only transport failures are.

use crate::config::Config;
use crate::constants::DEFAULT_NYPL_SOURCE;
use crate::error::PlatformError;
use crate::model::requests::{BibListParams, SearchOptions, join_keywords};
use crate::session::auth::{PlatformAuth, PlatformAuthenticator};
use reqwest::{Client, Response};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Session with the NYPL Platform API
///
/// Handles bearer-token authorization internally, including the initial token
/// request and re-authorization when the token expires.
pub struct PlatformSession {
    auth: Arc<PlatformAuth>,
    http: Client,
    config: Arc<Config>,
}

impl PlatformSession {
    /// Creates a new session and performs the initial token request
    ///
    /// # Arguments
    /// * `config` - Configuration with credentials, OAuth server and base URL
    ///
    /// # Returns
    /// * `Ok(PlatformSession)` - Authorized session ready to use
    /// * `Err(PlatformError)` - If the token request fails
    pub async fn connect(config: Config) -> Result<Self, PlatformError> {
        let session = Self::new_lazy(config);
        session.auth.authorize().await?;
        Ok(session)
    }

    /// Creates a new session without requesting a token up front
    ///
    /// The first query will trigger the token request.
    pub fn new_lazy(config: Config) -> Self {
        let config = Arc::new(config);

        let http = Client::builder()
            .user_agent(config.agent.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let auth = Arc::new(PlatformAuth::new(config.clone()));

        Self { auth, http, config }
    }

    /// Gets the authorization manager
    pub fn auth(&self) -> &PlatformAuth {
        &self.auth
    }

    /// Retrieves a single bib record
    ///
    /// `GET /bibs/{nyplSource}/{id}`
    ///
    /// # Arguments
    /// * `id` - Sierra bib number
    /// * `nypl_source` - Source system of the record; `sierra-nypl` when `None`
    pub async fn get_bib(
        &self,
        id: &str,
        nypl_source: Option<&str>,
    ) -> Result<Response, PlatformError> {
        let url = self.bib_url(id, nypl_source, None);
        self.get(&url, &[]).await
    }

    /// Retrieves item records linked to a bib record
    ///
    /// `GET /bibs/{nyplSource}/{id}/items`
    pub async fn get_bib_items(
        &self,
        id: &str,
        nypl_source: Option<&str>,
    ) -> Result<Response, PlatformError> {
        let url = self.bib_url(id, nypl_source, Some("items"));
        self.get(&url, &[]).await
    }

    /// Checks whether a bib record belongs to the research collection
    ///
    /// `GET /bibs/{nyplSource}/{id}/is-research`
    pub async fn check_bib_is_research(
        &self,
        id: &str,
        nypl_source: Option<&str>,
    ) -> Result<Response, PlatformError> {
        let url = self.bib_url(id, nypl_source, Some("is-research"));
        self.get(&url, &[]).await
    }

    /// Retrieves bib records matching the given filters
    ///
    /// `GET /bibs?...`
    pub async fn get_bib_list(&self, params: &BibListParams) -> Result<Response, PlatformError> {
        let url = format!("{}/bibs", self.base_url());
        self.get(&url, &params.to_query()).await
    }

    /// Searches bib records by standard numbers (ISBNs, ISSNs)
    ///
    /// # Arguments
    /// * `keywords` - Standard numbers; sent as one comma-separated value
    /// * `opts` - Deleted/limit/offset options
    pub async fn search_standard_nos<S: AsRef<str>>(
        &self,
        keywords: &[S],
        opts: &SearchOptions,
    ) -> Result<Response, PlatformError> {
        self.search("standardNumber", keywords, opts).await
    }

    /// Searches bib records by control numbers
    pub async fn search_control_nos<S: AsRef<str>>(
        &self,
        keywords: &[S],
        opts: &SearchOptions,
    ) -> Result<Response, PlatformError> {
        self.search("controlNumber", keywords, opts).await
    }

    /// Searches bib records by Sierra bib numbers
    pub async fn search_bib_nos<S: AsRef<str>>(
        &self,
        keywords: &[S],
        opts: &SearchOptions,
    ) -> Result<Response, PlatformError> {
        self.search("id", keywords, opts).await
    }

    /// Shared query building for the identifier searches
    async fn search<S: AsRef<str>>(
        &self,
        field: &str,
        keywords: &[S],
        opts: &SearchOptions,
    ) -> Result<Response, PlatformError> {
        let url = format!("{}/bibs", self.base_url());

        let mut query = vec![
            (field.to_string(), join_keywords(keywords)),
            ("nyplSource".to_string(), DEFAULT_NYPL_SOURCE.to_string()),
        ];
        opts.extend_query(&mut query);

        self.get(&url, &query).await
    }

    /// Issues a GET with the bearer token attached, re-authorizing first when
    /// the held token is expired or absent
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Response, PlatformError> {
        let token = self.auth.get_token().await?;

        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .bearer_auth(&token.token_str)
            .query(query)
            .send()
            .await?;

        debug!("Response status: {}", resp.status());
        Ok(resp)
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn bib_url(&self, id: &str, nypl_source: Option<&str>, suffix: Option<&str>) -> String {
        let source = nypl_source.unwrap_or(DEFAULT_NYPL_SOURCE);
        match suffix {
            Some(suffix) => format!("{}/bibs/{}/{}/{}", self.base_url(), source, id, suffix),
            None => format!("{}/bibs/{}/{}", self.base_url(), source, id),
        }
    }
}
