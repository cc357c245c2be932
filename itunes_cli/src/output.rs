use anyhow::Result;
use clap::ValueEnum;
use itunes_api::types::Record;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Placeholder printed for fields a record does not carry as a string.
const MISSING: &str = "?";

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered `NN - name (url)` listing
    Plain,
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ItemRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Artist")]
    #[serde(rename = "Artist")]
    artist: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

/// First string field present among the candidate keys.
fn first_str<'a>(record: &'a Record, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|key| record.get(key).and_then(|v| v.as_str()))
        .unwrap_or(MISSING)
}

fn build_item_rows(records: &[Record]) -> Vec<ItemRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| ItemRow {
            index: i + 1,
            name: first_str(r, &["trackName", "collectionName", "artistName"]).to_string(),
            kind: first_str(r, &["kind", "wrapperType"]).to_string(),
            artist: r.str_or("artistName", MISSING).to_string(),
            url: first_str(
                r,
                &["trackViewUrl", "collectionViewUrl", "artistLinkUrl", "artistViewUrl"],
            )
            .to_string(),
        })
        .collect()
}

/// Numbered `NN - name (url)` lines, one per record.
fn build_listing(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{:2} - {} ({})",
                i + 1,
                r.str_or("trackName", MISSING),
                r.str_or("trackViewUrl", MISSING)
            )
        })
        .collect()
}

pub fn print_records(records: &[Record], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => print_listing(records),
        OutputFormat::Table => print_table(records),
        OutputFormat::Markdown => print_markdown(records),
        OutputFormat::Csv => print_csv(records)?,
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}

pub fn print_listing(records: &[Record]) {
    for line in build_listing(records) {
        println!("{}", line);
    }
}

pub fn print_table(records: &[Record]) {
    println!("{}", Table::new(build_item_rows(records)));
}

pub fn print_markdown(records: &[Record]) {
    let mut table = Table::new(build_item_rows(records));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_csv(records: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_item_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itunes_api::types::Envelope;
    use serde_json::json;

    fn load_search_fixture() -> Vec<Record> {
        let json_str = include_str!("../../itunes_api/tests/fixtures/search_songs.json");
        Envelope::from_slice(json_str.as_bytes()).unwrap().results
    }

    fn load_lookup_fixture() -> Vec<Record> {
        let json_str = include_str!("../../itunes_api/tests/fixtures/lookup_artist.json");
        Envelope::from_slice(json_str.as_bytes()).unwrap().results
    }

    #[test]
    fn listing_is_numbered() {
        let lines = build_listing(&load_search_fixture());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            " 1 - Banana Pancakes (https://music.apple.com/us/album/banana-pancakes/879273552?i=879273565&uo=4)"
        );
        assert!(lines[1].starts_with(" 2 - Upside Down ("));
    }

    #[test]
    fn listing_uses_placeholder() {
        let records = vec![
            Record::new(json!({"trackName": 42})),
            Record::new(json!({})),
        ];
        assert_eq!(build_listing(&records), vec![" 1 - ? (?)", " 2 - ? (?)"]);
    }

    #[test]
    fn listing_pads_to_two_columns_only() {
        let records: Vec<Record> = (0..10).map(|_| Record::new(json!({}))).collect();
        let lines = build_listing(&records);
        assert!(lines[8].starts_with(" 9 - "));
        assert!(lines[9].starts_with("10 - "));
    }

    #[test]
    fn rows_from_songs() {
        let rows = build_item_rows(&load_search_fixture());
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].name, "Banana Pancakes");
        assert_eq!(rows[0].kind, "song");
        assert_eq!(rows[0].artist, "Jack Johnson");
        assert!(rows[0].url.contains("banana-pancakes"));
    }

    #[test]
    fn rows_from_artist_fall_back() {
        let rows = build_item_rows(&load_lookup_fixture());
        assert_eq!(rows[0].name, "Jack Johnson");
        assert_eq!(rows[0].kind, "artist");
        assert_eq!(
            rows[0].url,
            "https://music.apple.com/us/artist/jack-johnson/909253?uo=4"
        );
    }

    #[test]
    fn rows_with_nothing_known() {
        let rows = build_item_rows(&[Record::new(json!(null))]);
        assert_eq!(rows[0].name, "?");
        assert_eq!(rows[0].kind, "?");
        assert_eq!(rows[0].artist, "?");
        assert_eq!(rows[0].url, "?");
    }

    #[test]
    fn table_has_headers() {
        let table = Table::new(build_item_rows(&load_search_fixture())).to_string();
        for header in ["#", "Name", "Kind", "Artist", "URL"] {
            assert!(table.contains(header));
        }
        assert!(table.contains("Upside Down"));
    }

    #[test]
    fn csv_rows_serialize() {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in build_item_rows(&load_search_fixture()) {
            wtr.serialize(row).unwrap();
        }
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let mut lines = data.lines();
        assert_eq!(lines.next(), Some("#,Name,Kind,Artist,URL"));
        assert!(lines.next().unwrap().starts_with("1,Banana Pancakes,song,Jack Johnson,"));
    }

    #[test]
    fn output_format_values() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("md", true), Ok(OutputFormat::Markdown));
        assert!(OutputFormat::from_str("jsn", true).is_err());
    }
}
