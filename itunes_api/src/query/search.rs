use crate::types::Media;

use super::{common::QueryCommon, Query, QueryArgs};

/// Parameters for the `search` endpoint.
#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub term: String,
    pub media: Option<Media>,
    pub attribute: Option<String>,
    pub lang: Option<String>,
    pub explicit: Option<bool>,
}

impl Query for SearchQuery {
    const ENDPOINT: &'static str = "search";

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_args(&self, args: &mut QueryArgs) {
        args.push("term", self.term.as_str());
        if let Some(media) = self.media {
            args.push("media", media.to_string());
        }
        if let Some(attribute) = &self.attribute {
            args.push("attribute", attribute.as_str());
        }
        if let Some(lang) = &self.lang {
            args.push("lang", lang.as_str());
        }
        if let Some(explicit) = self.explicit {
            args.push("explicit", if explicit { "Yes" } else { "No" });
        }
        self.common.add_to_args(args);
    }
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            ..Default::default()
        }
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Attribute to match the term against (e.g. `artistTerm`), relative to
    /// the media type.
    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attribute = Some(attribute.to_string());
        self
    }

    /// Result language, `en_us` or `ja_jp`.
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn with_explicit(mut self, explicit: bool) -> Self {
        self.explicit = Some(explicit);
        self
    }
}
