//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use super::QueryArgs;

/// Trait implemented by the typed query builders. Provides conversion into
/// [`QueryArgs`] and the builder methods both endpoints accept.
pub trait Query {
    /// Endpoint name resolved against the client's base URL.
    const ENDPOINT: &'static str;

    /// Appends this query's parameters to `args`.
    fn add_to_args(&self, args: &mut QueryArgs);

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    fn to_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();
        self.add_to_args(&mut args);
        args
    }

    /// Restricts results to an entity type relative to the media type
    /// (e.g. `song`, `album`, `iPadSoftware`).
    fn with_entity(mut self, entity: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().entity = Some(entity.to_string());
        self
    }

    /// Two-letter ISO country code of the store to query.
    fn with_country(mut self, country: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().country = Some(country.to_string());
        self
    }

    /// Maximum number of results. The API accepts 1 to 200.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }
}

/// Fields shared by search and lookup queries. `None` leaves the API default.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    pub entity: Option<String>,
    pub country: Option<String>,
    pub limit: Option<u32>,
}

impl QueryCommon {
    pub fn add_to_args(&self, args: &mut QueryArgs) {
        if let Some(entity) = &self.entity {
            args.push("entity", entity.as_str());
        }
        if let Some(country) = &self.country {
            args.push("country", country.as_str());
        }
        if let Some(limit) = self.limit {
            args.push("limit", limit.to_string());
        }
    }
}
