use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{finish, Store};
use crate::db::entities::locations;
use crate::error::Result;

impl Store {
    /// Existing location for (city, state), or a freshly inserted one.
    pub async fn find_or_create_location(&self, city: &str, state: &str) -> Result<locations::Model> {
        let txn = self.begin().await?;
        let result = resolve_location(&txn, city, state).await;
        finish(txn, result).await
    }

    pub async fn list_locations(&self) -> Result<Vec<locations::Model>> {
        Ok(locations::Entity::find()
            .order_by_asc(locations::Column::Id)
            .all(&self.db)
            .await?)
    }
}

/// Lookup-then-insert on the caller's connection, so it joins whatever
/// transaction the caller holds. The first matching row (lowest id) wins.
pub(super) async fn resolve_location<C: ConnectionTrait>(
    conn: &C,
    city: &str,
    state: &str,
) -> Result<locations::Model> {
    if let Some(existing) = locations::Entity::find()
        .filter(locations::Column::City.eq(city))
        .filter(locations::Column::State.eq(state))
        .order_by_asc(locations::Column::Id)
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let location = locations::ActiveModel {
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::debug!("Created location {} ({}, {})", location.id, city, state);
    Ok(location)
}
