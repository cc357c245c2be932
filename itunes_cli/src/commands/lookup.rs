use anyhow::{bail, Result};
use clap::Args;
use itunes_api::{Client, LookupQuery, Query};

use crate::output::{print_records, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct LookupArgs {
    /// iTunes ID to look up (repeatable)
    #[arg(long)]
    pub id: Vec<i64>,

    /// AMG artist ID to look up (repeatable)
    #[arg(long)]
    pub amg_artist_id: Vec<i64>,

    /// UPC of an album or video (repeatable)
    #[arg(long)]
    pub upc: Vec<String>,

    /// ISBN-13 of a book (repeatable)
    #[arg(long)]
    pub isbn: Vec<String>,

    /// App bundle identifier (e.g. com.yelp.yelpiphone)
    #[arg(long)]
    pub bundle_id: Option<String>,

    /// Related entity type to include (e.g. album, song)
    #[arg(long)]
    pub entity: Option<String>,

    /// Maximum number of related results (1-200)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort order for related results: recent
    #[arg(long)]
    pub sort: Option<String>,

    /// Two-letter country code of the store
    #[arg(long)]
    pub country: Option<String>,
}

pub fn build_query(args: &LookupArgs) -> Result<LookupQuery> {
    if args.id.is_empty()
        && args.amg_artist_id.is_empty()
        && args.upc.is_empty()
        && args.isbn.is_empty()
        && args.bundle_id.is_none()
    {
        bail!("lookup needs at least one of --id, --amg-artist-id, --upc, --isbn, --bundle-id");
    }

    let mut query = LookupQuery::default()
        .with_ids(&args.id)
        .with_amg_artist_ids(&args.amg_artist_id);
    for upc in &args.upc {
        query = query.with_upc(upc.trim());
    }
    for isbn in &args.isbn {
        query = query.with_isbn(isbn.trim());
    }
    if let Some(bundle_id) = &args.bundle_id {
        query = query.with_bundle_id(bundle_id.trim());
    }
    if let Some(entity) = &args.entity {
        query = query.with_entity(entity.trim());
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(validation::validate_limit(limit)?);
    }
    if let Some(sort) = &args.sort {
        query = query.with_sort(validation::validate_sort(sort)?);
    }
    if let Some(country) = &args.country {
        query = query.with_country(&validation::validate_country(country)?);
    }
    Ok(query)
}

pub async fn run(args: &LookupArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let items = client.lookup_with(&query).await?;
    tracing::info!("{} results", items.len());
    print_records(&items, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> LookupArgs {
        LookupArgs {
            id: vec![],
            amg_artist_id: vec![],
            upc: vec![],
            isbn: vec![],
            bundle_id: None,
            entity: None,
            limit: None,
            sort: None,
            country: None,
        }
    }

    #[test]
    fn requires_an_identifier() {
        assert!(build_query(&empty()).is_err());
    }

    #[test]
    fn ids_and_related_entities() {
        let mut a = empty();
        a.id = vec![909253, 284910350];
        a.entity = Some("album".to_string());
        a.limit = Some(5);
        a.sort = Some("recent".to_string());
        let encoded = build_query(&a).unwrap().to_args().encode();
        assert_eq!(
            encoded,
            "entity=album&id=909253%2C284910350&limit=5&sort=recent"
        );
    }

    #[test]
    fn bundle_id_alone_is_enough() {
        let mut a = empty();
        a.bundle_id = Some("com.yelp.yelpiphone".to_string());
        a.country = Some("us".to_string());
        let encoded = build_query(&a).unwrap().to_args().encode();
        assert_eq!(encoded, "bundleId=com.yelp.yelpiphone&country=US");
    }

    #[test]
    fn bad_sort_is_rejected() {
        let mut a = empty();
        a.id = vec![1];
        a.sort = Some("oldest".to_string());
        assert!(build_query(&a).is_err());
    }
}
