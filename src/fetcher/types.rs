//! APOD Record Types
//!
//! The provider's response shape. Only the fields the viewer uses are
//! modeled; anything else in the body is ignored on deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the provider (`2024-01-01`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's Astronomy Picture of the Day record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date of the record, as sent by the provider
    pub date: String,
    /// Display title
    pub title: String,
    /// Free-text description
    pub explanation: String,
    /// Selects the render strategy for `url`
    pub media_type: MediaType,
    /// Primary media URL. Interactive (`other`) days omit it.
    #[serde(default)]
    pub url: String,
    /// Higher-resolution image URL, images only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// Opaque provider version tag
    #[serde(default)]
    pub service_version: String,
}

impl DayRecord {
    /// Parse `date` as a calendar date.
    ///
    /// Returns `None` if the provider sent something other than `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Media kind of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Any value the viewer has no renderer for
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other => "other",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BODY: &str = r#"{
        "copyright": "Someone",
        "date": "2024-01-01",
        "explanation": "A bright full moon.",
        "hdurl": "https://apod.nasa.gov/apod/image/2401/moon_hd.jpg",
        "media_type": "image",
        "service_version": "v1",
        "title": "Moon",
        "url": "https://apod.nasa.gov/apod/image/2401/moon.jpg"
    }"#;

    #[test]
    fn test_deserialize_image_record() {
        let record: DayRecord = serde_json::from_str(IMAGE_BODY).unwrap();

        assert_eq!(record.title, "Moon");
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(
            record.hdurl.as_deref(),
            Some("https://apod.nasa.gov/apod/image/2401/moon_hd.jpg")
        );
        assert_eq!(record.service_version, "v1");
        assert_eq!(
            record.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_deserialize_video_without_hdurl() {
        let body = r#"{
            "date": "2024-02-10",
            "explanation": "A launch.",
            "media_type": "video",
            "service_version": "v1",
            "title": "Liftoff",
            "url": "https://www.youtube.com/embed/abc"
        }"#;
        let record: DayRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.media_type, MediaType::Video);
        assert!(record.hdurl.is_none());
    }

    #[test]
    fn test_unknown_media_type_is_other() {
        let body = r#"{
            "date": "2024-03-01",
            "explanation": "An interactive page.",
            "media_type": "other",
            "title": "Something Else",
            "url": ""
        }"#;
        let record: DayRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.media_type, MediaType::Other);
        assert_eq!(record.service_version, "");

        let body = body.replace("\"other\"", "\"hologram\"");
        let record: DayRecord = serde_json::from_str(&body).unwrap();
        assert_eq!(record.media_type, MediaType::Other);
    }

    #[test]
    fn test_other_media_without_url() {
        let body = r#"{
            "date": "2018-10-19",
            "explanation": "An interactive page.",
            "media_type": "other",
            "service_version": "v1",
            "title": "Interactive"
        }"#;
        let record: DayRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.media_type, MediaType::Other);
        assert_eq!(record.url, "");
        assert_eq!(record.title, "Interactive");
    }

    #[test]
    fn test_unparseable_date() {
        let mut record: DayRecord = serde_json::from_str(IMAGE_BODY).unwrap();
        record.date = "January 1st".to_string();
        assert!(record.parsed_date().is_none());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let body = r#"{"date": "2024-01-01", "media_type": "image", "url": "x", "explanation": ""}"#;
        assert!(serde_json::from_str::<DayRecord>(body).is_err());
    }
}
