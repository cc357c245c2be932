use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Media type accepted by the `media` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Media {
    Movie,
    Podcast,
    Music,
    MusicVideo,
    Audiobook,
    ShortFilm,
    TvShow,
    Software,
    Ebook,
    #[default]
    All,
}

impl Media {
    pub const ALL: [Media; 10] = [
        Media::Movie,
        Media::Podcast,
        Media::Music,
        Media::MusicVideo,
        Media::Audiobook,
        Media::ShortFilm,
        Media::TvShow,
        Media::Software,
        Media::Ebook,
        Media::All,
    ];
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Media::Movie => "movie",
                Media::Podcast => "podcast",
                Media::Music => "music",
                Media::MusicVideo => "musicVideo",
                Media::Audiobook => "audiobook",
                Media::ShortFilm => "shortFilm",
                Media::TvShow => "tvShow",
                Media::Software => "software",
                Media::Ebook => "ebook",
                Media::All => "all",
            }
        )
    }
}

impl FromStr for Media {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Media::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Ordering for `lookup` results. The API only understands `recent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupSort {
    Recent,
}

impl std::fmt::Display for LookupSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupSort::Recent => write!(f, "recent"),
        }
    }
}

impl FromStr for LookupSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(LookupSort::Recent),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_wire_names_round_trip() {
        for media in Media::ALL {
            assert_eq!(media.to_string().parse::<Media>(), Ok(media));
        }
        assert_eq!("MUSICVIDEO".parse::<Media>(), Ok(Media::MusicVideo));
        assert!("vinyl".parse::<Media>().is_err());
    }

    #[test]
    fn media_serde_matches_display() {
        let json = serde_json::to_value(Media::TvShow).unwrap();
        assert_eq!(json, serde_json::json!("tvShow"));
    }
}
