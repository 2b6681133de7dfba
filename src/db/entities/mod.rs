pub mod locations;
pub mod venues;
pub mod artists;
pub mod shows;

pub use locations::Entity as Location;
pub use venues::Entity as Venue;
pub use artists::Entity as Artist;
pub use shows::Entity as Show;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered genre list, persisted as a JSON array
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Genres {
    fn from(genres: Vec<String>) -> Self {
        Self(genres)
    }
}
