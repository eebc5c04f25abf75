use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{Penguin, PenguinDataset, Species};

/// The dataset shipped with the application, loaded once at startup.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the bundled Palmer Penguins CSV.
pub fn load_embedded() -> Result<PenguinDataset> {
    load_csv_str(PENGUINS_CSV).context("parsing bundled penguins.csv")
}

// ---------------------------------------------------------------------------
// Raw record – the on-disk row shape, shared by the CSV and JSON parsers
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. Species arrives as text and is
/// validated into the [`Species`] enum afterwards; empty/null cells become
/// `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    species: String,
    island: String,
    #[serde(default)]
    bill_length_mm: Option<f64>,
    #[serde(default)]
    bill_depth_mm: Option<f64>,
    #[serde(default)]
    flipper_length_mm: Option<f64>,
    #[serde(default)]
    body_mass_g: Option<f64>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    year: Option<i32>,
}

impl RawRecord {
    fn into_penguin(self, row: usize) -> Result<Penguin> {
        let species: Species = self
            .species
            .parse()
            .with_context(|| format!("row {row}"))?;

        Ok(Penguin {
            species,
            island: self.island,
            bill_length_mm: self.bill_length_mm,
            bill_depth_mm: self.bill_depth_mm,
            flipper_length_mm: self.flipper_length_mm,
            body_mass_g: self.body_mass_g,
            sex: self.sex.filter(|s| !s.is_empty()),
            year: self.year,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row with the palmerpenguins column names
/// (`species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,
/// body_mass_g,sex,year`); empty cells are null measurements.
pub fn load_csv_str(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut penguins = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        penguins.push(raw.into_penguin(row_no)?);
    }

    if penguins.is_empty() {
        bail!("CSV contained no records");
    }
    Ok(PenguinDataset::new(penguins))
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "species": "Adelie", "island": "Torgersen",
///     "bill_length_mm": 39.1, "bill_depth_mm": 18.7,
///     "flipper_length_mm": 181, "body_mass_g": 3750,
///     "sex": "male", "year": 2007 },
///   ...
/// ]
/// ```
pub fn load_json_str(text: &str) -> Result<PenguinDataset> {
    let records: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    if records.is_empty() {
        bail!("JSON contained no records");
    }

    let penguins = records
        .into_iter()
        .enumerate()
        .map(|(row_no, raw)| raw.into_penguin(row_no))
        .collect::<Result<Vec<_>>>()?;

    Ok(PenguinDataset::new(penguins))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Adelie,Torgersen,39.1,18.7,181,3750,male,2007
Gentoo,Biscoe,46.1,13.2,211,4500,female,2007
Adelie,Torgersen,,,,,,2007
";

    #[test]
    fn csv_rows_parse_with_nulls_preserved() {
        let ds = load_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.penguins[0].species, Species::Adelie);
        assert_eq!(ds.penguins[0].body_mass_g, Some(3750.0));
        assert_eq!(ds.penguins[1].island, "Biscoe");
        assert_eq!(ds.penguins[2].bill_length_mm, None);
        assert_eq!(ds.penguins[2].sex, None);
        assert_eq!(ds.penguins[2].year, Some(2007));
    }

    #[test]
    fn unknown_species_fails_with_row_context() {
        let bad = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Emperor,Dream,40.0,18.0,190,3600,male,2008
";
        let err = load_csv_str(bad).unwrap_err();
        assert!(format!("{err:#}").contains("Emperor"));
    }

    #[test]
    fn empty_csv_is_an_error() {
        let header_only =
            "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n";
        assert!(load_csv_str(header_only).is_err());
    }

    #[test]
    fn json_records_parse_with_null_and_missing_fields() {
        let text = r#"[
            { "species": "Chinstrap", "island": "Dream",
              "bill_length_mm": 46.5, "bill_depth_mm": 17.9,
              "flipper_length_mm": 192, "body_mass_g": 3500,
              "sex": "female", "year": 2007 },
            { "species": "Gentoo", "island": "Biscoe",
              "bill_length_mm": null, "bill_depth_mm": 14.0,
              "body_mass_g": 5000 }
        ]"#;
        let ds = load_json_str(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.penguins[0].species, Species::Chinstrap);
        assert_eq!(ds.penguins[1].bill_length_mm, None);
        assert_eq!(ds.penguins[1].flipper_length_mm, None);
        assert_eq!(ds.penguins[1].sex, None);
    }

    #[test]
    fn bundled_dataset_loads_and_covers_all_species() {
        let ds = load_embedded().unwrap();
        assert!(ds.len() > 300);
        for sp in crate::data::model::ALL_SPECIES {
            assert!(ds.species_count(sp) > 0, "no {sp} records in bundle");
        }
        // The bundle keeps the known null-measurement rows.
        assert!(ds.penguins.iter().any(|p| !p.has_plot_fields()));
    }
}
