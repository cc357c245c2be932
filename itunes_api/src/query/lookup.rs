use crate::types::LookupSort;

use super::{common::QueryCommon, Query, QueryArgs};

/// Parameters for the `lookup` endpoint. Identifiers of one kind are sent
/// comma-separated under a single key, which is how the API batches them.
#[derive(Clone, Debug, Default)]
pub struct LookupQuery {
    pub common: QueryCommon,
    pub ids: Vec<i64>,
    pub amg_artist_ids: Vec<i64>,
    pub upcs: Vec<String>,
    pub isbns: Vec<String>,
    pub bundle_id: Option<String>,
    pub sort: Option<LookupSort>,
}

impl Query for LookupQuery {
    const ENDPOINT: &'static str = "lookup";

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_args(&self, args: &mut QueryArgs) {
        if !self.ids.is_empty() {
            args.push("id", join(&self.ids));
        }
        if !self.amg_artist_ids.is_empty() {
            args.push("amgArtistId", join(&self.amg_artist_ids));
        }
        if !self.upcs.is_empty() {
            args.push("upc", self.upcs.join(","));
        }
        if !self.isbns.is_empty() {
            args.push("isbn", self.isbns.join(","));
        }
        if let Some(bundle_id) = &self.bundle_id {
            args.push("bundleId", bundle_id.as_str());
        }
        if let Some(sort) = self.sort {
            args.push("sort", sort.to_string());
        }
        self.common.add_to_args(args);
    }
}

impl LookupQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.ids.push(id);
        self
    }
    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    pub fn with_amg_artist_id(mut self, id: i64) -> Self {
        self.amg_artist_ids.push(id);
        self
    }
    pub fn with_amg_artist_ids(mut self, ids: &[i64]) -> Self {
        self.amg_artist_ids.extend_from_slice(ids);
        self
    }

    pub fn with_upc(mut self, upc: &str) -> Self {
        self.upcs.push(upc.to_string());
        self
    }

    pub fn with_isbn(mut self, isbn: &str) -> Self {
        self.isbns.push(isbn.to_string());
        self
    }

    pub fn with_bundle_id(mut self, bundle_id: &str) -> Self {
        self.bundle_id = Some(bundle_id.to_string());
        self
    }

    pub fn with_sort(mut self, sort: LookupSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

fn join(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
