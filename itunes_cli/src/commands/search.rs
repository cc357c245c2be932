use anyhow::Result;
use clap::Args;
use itunes_api::{Client, QueryArgs};

use crate::output::{print_records, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for (e.g. "Angry Birds")
    pub term: String,

    /// The media type you want to search for. For example: movie
    #[arg(long, default_value = "all")]
    pub media: String,

    /// The type of results you want returned, relative to the specified media type
    #[arg(long, default_value = "")]
    pub entity: String,

    /// The two-letter country code for the store you want to search
    #[arg(long, default_value = "US")]
    pub country: String,

    /// Maximum number of results (1-200)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Attribute to match the term against, relative to the media type (e.g. artistTerm)
    #[arg(long)]
    pub attribute: Option<String>,

    /// Result language: en_us or ja_jp
    #[arg(long)]
    pub lang: Option<String>,

    /// Include explicit content: yes or no
    #[arg(long)]
    pub explicit: Option<String>,
}

/// Flattens the arguments into the key/value list sent to `search`.
pub fn build_args(args: &SearchArgs) -> Result<QueryArgs> {
    let term = validation::validate_term(&args.term)?;
    let media = validation::validate_media(&args.media)?;
    let country = validation::validate_country(&args.country)?;

    let mut query = QueryArgs::from_flat([
        "term".to_string(),
        term,
        "media".to_string(),
        media.to_string(),
        "entity".to_string(),
        args.entity.trim().to_string(),
        "country".to_string(),
        country,
    ]);

    if let Some(limit) = args.limit {
        query.push("limit", validation::validate_limit(limit)?.to_string());
    }
    if let Some(attribute) = &args.attribute {
        query.push("attribute", attribute.trim());
    }
    if let Some(lang) = &args.lang {
        query.push("lang", lang.trim());
    }
    if let Some(explicit) = &args.explicit {
        let explicit = validation::validate_explicit(explicit)?;
        query.push("explicit", if explicit { "Yes" } else { "No" });
    }
    Ok(query)
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_args(args)?;
    let items = client.search(&query).await?;
    tracing::info!("{} results for {:?}", items.len(), args.term);
    print_records(&items, format)
}
