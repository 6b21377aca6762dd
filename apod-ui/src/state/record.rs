//! Day Record
//!
//! Mirror of the server's record JSON.

/// One day's Astronomy Picture of the Day record
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DayRecord {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub service_version: String,
}

/// Media kind of a record
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}
