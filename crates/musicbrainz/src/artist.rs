use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(rename = "sort-name", default)]
    pub sort_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub disambiguation: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Match score, only present in search responses.
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(rename = "life-span", default)]
    pub life_span: Option<LifeSpan>,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Artist {
    pub const ENTITY: &'static str = "artist";
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LifeSpan {
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub ended: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Alias {
    pub name: String,
    #[serde(rename = "sort-name", default)]
    pub sort_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub count: Option<u32>,
}

/// One page of artists. Search responses carry `count`/`offset`, browse
/// responses `artist-count`/`artist-offset`; both land here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArtistList {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default, alias = "artist-count")]
    pub count: u32,
    #[serde(default, alias = "artist-offset")]
    pub offset: u32,
}
