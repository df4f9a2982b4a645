pub mod artist;
mod error;
pub mod query;
mod service;

use std::time::Duration;

pub use error::MusicBrainzError;
pub use query::QueryParameters;
pub use service::ArtistService;

use reqwest::Url;
use serde::de::DeserializeOwned;

const BASE_URL: &'static str = "https://musicbrainz.org/ws/2";
const USER_AGENT: &'static str = concat!("musicbrainz/", env!("CARGO_PKG_VERSION"));

/// Page window for search and browse requests. The API default is 25
/// results starting at offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            limit: 25,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new() -> Result<Self, MusicBrainzError> {
        Self::builder().build()
    }

    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }

    /// Artist operations backed by this client.
    pub fn artists(&self) -> ArtistService<'_> {
        ArtistService::new(self)
    }

    pub fn lookup_url(
        &self,
        entity: &str,
        id: &str,
        includes: &[&str],
    ) -> Result<Url, MusicBrainzError> {
        let mut url = Url::parse(&format!("{}/{}/{}", self.base_url, entity, id))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("fmt", "json");
            if !includes.is_empty() {
                // the form serializer turns the spaces into `+`
                pairs.append_pair("inc", &includes.join(" "));
            }
        }
        Ok(url)
    }

    pub fn search_url(
        &self,
        entity: &str,
        query: &str,
        paging: Paging,
    ) -> Result<Url, MusicBrainzError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, entity))?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("limit", &paging.limit.to_string())
            .append_pair("offset", &paging.offset.to_string())
            .append_pair("fmt", "json");
        Ok(url)
    }

    pub fn browse_url(
        &self,
        entity: &str,
        related: &str,
        related_id: &str,
        paging: Paging,
        includes: &[&str],
    ) -> Result<Url, MusicBrainzError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, entity))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair(related, related_id)
                .append_pair("limit", &paging.limit.to_string())
                .append_pair("offset", &paging.offset.to_string());
            if !includes.is_empty() {
                pairs.append_pair("inc", &includes.join(" "));
            }
            pairs.append_pair("fmt", "json");
        }
        Ok(url)
    }

    /// Perform a GET against a built URL and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, MusicBrainzError> {
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MusicBrainzError::Api {
                status: status.as_u16(),
                message: response.text().await?,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for MusicBrainzClientBuilder {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl MusicBrainzClientBuilder {
    /// Point the client at another base URL, e.g. a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MusicBrainzClient, MusicBrainzError> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(MusicBrainzClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MusicBrainzClient {
        MusicBrainzClient::builder()
            .base_url("http://localhost:5000/ws/2")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_url_without_includes() {
        let url = client().lookup_url("artist", "abc-123", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/ws/2/artist/abc-123?fmt=json"
        );
    }

    #[test]
    fn test_lookup_url_joins_includes_with_plus() {
        let url = client()
            .lookup_url("artist", "abc-123", &["aliases", "tags"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/ws/2/artist/abc-123?fmt=json&inc=aliases+tags"
        );
    }

    #[test]
    fn test_search_url_carries_default_paging() {
        let url = client()
            .search_url("artist", "Nirvana", Paging::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/ws/2/artist?query=Nirvana&limit=25&offset=0&fmt=json"
        );
    }

    #[test]
    fn test_browse_url_filters_by_related_entity() {
        let url = client()
            .browse_url(
                "artist",
                "label",
                "xyz",
                Paging {
                    limit: 10,
                    offset: 5,
                },
                &["aliases"],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/ws/2/artist?label=xyz&limit=10&offset=5&inc=aliases&fmt=json"
        );
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = MusicBrainzClient::builder()
            .base_url("http://localhost:5000/ws/2/")
            .build()
            .unwrap();
        let url = client.lookup_url("artist", "abc", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/ws/2/artist/abc?fmt=json");
    }
}
