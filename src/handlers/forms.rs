//! Form payloads and their conversion into store inputs.
//!
//! Forms are read with `axum_extra::extract::Form`, which collects repeated
//! `genres` fields into a list.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::store::{ArtistFields, VenueFields};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub seeking_talent: String,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
}

impl VenueForm {
    /// Splits the submission into venue fields and the (city, state) pair.
    pub fn into_parts(self) -> (VenueFields, String, String) {
        let fields = VenueFields {
            name: self.name.trim().to_string(),
            address: non_empty(self.address),
            phone: non_empty(self.phone),
            genres: clean_genres(self.genres),
            website: non_empty(self.website),
            seeking_talent: non_empty(self.seeking_talent),
            seeking_description: non_empty(self.seeking_description),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
        };
        (fields, self.city.trim().to_string(), self.state.trim().to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub seeking_venue: String,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
}

impl ArtistForm {
    pub fn into_parts(self) -> (ArtistFields, String, String) {
        let fields = ArtistFields {
            name: self.name.trim().to_string(),
            phone: non_empty(self.phone),
            genres: clean_genres(self.genres),
            website: non_empty(self.website),
            seeking_venue: non_empty(self.seeking_venue),
            seeking_description: non_empty(self.seeking_description),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
        };
        (fields, self.city.trim().to_string(), self.state.trim().to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn parse(&self) -> Result<(i32, i32, NaiveDate)> {
        let artist_id = parse_id("artist_id", &self.artist_id)?;
        let venue_id = parse_id("venue_id", &self.venue_id)?;
        let start_date = parse_show_date(&self.start_time)?;
        Ok((artist_id, venue_id, start_date))
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn clean_genres(genres: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres.into_iter().filter_map(non_empty) {
        if !cleaned.contains(&genre) {
            cleaned.push(genre);
        }
    }
    cleaned
}

fn parse_id(field: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a whole number", field)))
}

/// Accepts a bare date or the date part of a date-time, as sent by date and
/// datetime-local inputs.
pub fn parse_show_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| AppError::Validation(format!("'{}' is not a valid show date", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_venue_form_blank_fields_become_absent() {
        let form = VenueForm {
            name: "  The Musical Hop ".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "   ".to_string(),
            genres: vec!["Jazz".to_string(), "".to_string(), "Jazz".to_string(), "Folk".to_string()],
            website: "https://www.themusicalhop.com".to_string(),
            ..Default::default()
        };

        let (fields, city, state) = form.into_parts();

        assert_eq!(fields.name, "The Musical Hop");
        assert_eq!(fields.phone, None);
        assert_eq!(fields.address, None);
        assert_eq!(fields.genres, vec!["Jazz".to_string(), "Folk".to_string()]);
        assert_eq!(fields.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert_eq!(city, "San Francisco");
        assert_eq!(state, "CA");
    }

    #[test]
    fn test_artist_form_into_parts() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            ..Default::default()
        };

        let (fields, _, _) = form.into_parts();

        assert_eq!(fields.phone.as_deref(), Some("326-123-5000"));
        assert_eq!(fields.genres, vec!["Rock n Roll".to_string()]);
        assert_eq!(fields.facebook_link, None);
    }

    #[test]
    fn test_parse_show_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2035, 4, 1).unwrap();
        assert_eq!(parse_show_date("2035-04-01").unwrap(), expected);
        assert_eq!(parse_show_date("2035-04-01T20:00").unwrap(), expected);
        assert_eq!(parse_show_date("2035-04-01 20:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_show_date_rejects_garbage() {
        assert!(matches!(parse_show_date("next friday"), Err(AppError::Validation(_))));
        assert!(matches!(parse_show_date(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_show_form_rejects_non_numeric_ids() {
        let form = ShowForm {
            artist_id: "four".to_string(),
            venue_id: "1".to_string(),
            start_time: "2035-04-01".to_string(),
        };
        assert!(matches!(form.parse(), Err(AppError::Validation(_))));

        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: " 1 ".to_string(),
            start_time: "2035-04-01".to_string(),
        };
        let (artist_id, venue_id, _) = form.parse().unwrap();
        assert_eq!((artist_id, venue_id), (4, 1));
    }
}
