use crate::{
    MusicBrainzClient, MusicBrainzError, Paging,
    artist::{Artist, ArtistList},
    query::QueryParameters,
};

/// Stateless façade over [`MusicBrainzClient`] for the artist entity.
/// Holds no state of its own; the client's lifetime is managed by the caller.
#[derive(Debug, Clone, Copy)]
pub struct ArtistService<'a> {
    client: &'a MusicBrainzClient,
}

impl<'a> ArtistService<'a> {
    pub fn new(client: &'a MusicBrainzClient) -> Self {
        Self { client }
    }

    /// Fetch a single artist by its MBID, optionally embedding related
    /// sub-entities (`aliases`, `tags`, ...).
    pub async fn lookup(
        &self,
        id: impl AsRef<str>,
        includes: &[&str],
    ) -> Result<Artist, MusicBrainzError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(MusicBrainzError::MissingParameter("id"));
        }

        let url = self.client.lookup_url(Artist::ENTITY, id, includes)?;
        self.client.get(url).await
    }

    /// Search artists matching a free-text query.
    pub async fn search(
        &self,
        query: impl AsRef<str>,
        paging: Paging,
    ) -> Result<ArtistList, MusicBrainzError> {
        let query = query.as_ref();
        if query.is_empty() {
            return Err(MusicBrainzError::MissingParameter("query"));
        }

        let url = self.client.search_url(Artist::ENTITY, query, paging)?;
        self.client.get(url).await
    }

    /// Search with a structured query, equivalent to [`ArtistService::search`]
    /// on its rendered string form.
    pub async fn search_params(
        &self,
        query: &QueryParameters,
        paging: Paging,
    ) -> Result<ArtistList, MusicBrainzError> {
        self.search(query.to_string(), paging).await
    }

    /// List artists directly linked to another entity, e.g. all artists on a
    /// label.
    pub async fn browse(
        &self,
        related: impl AsRef<str>,
        related_id: impl AsRef<str>,
        paging: Paging,
        includes: &[&str],
    ) -> Result<ArtistList, MusicBrainzError> {
        let url = self.client.browse_url(
            Artist::ENTITY,
            related.as_ref(),
            related_id.as_ref(),
            paging,
            includes,
        )?;
        self.client.get(url).await
    }
}
