use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Species – the closed set of penguin species in the dataset
// ---------------------------------------------------------------------------

/// The three species observed in the Palmer Archipelago study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

/// All species, in the order the dashboard lists them.
pub const ALL_SPECIES: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown penguin species: '{0}'")]
pub struct SpeciesParseError(pub String);

impl FromStr for Species {
    type Err = SpeciesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Gentoo" => Ok(Species::Gentoo),
            "Chinstrap" => Ok(Species::Chinstrap),
            other => Err(SpeciesParseError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation. Measurement columns are nullable in the
/// source data, so they stay `Option` here.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<String>,
    pub year: Option<i32>,
}

impl Penguin {
    /// Whether all fields the scatter/histogram plots draw from are present.
    pub fn has_plot_fields(&self) -> bool {
        self.bill_length_mm.is_some() && self.bill_depth_mm.is_some() && self.body_mass_g.is_some()
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Row order is the file order and is preserved
/// through filtering for display.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    pub penguins: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(penguins: Vec<Penguin>) -> Self {
        PenguinDataset { penguins }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// How many records belong to the given species.
    pub fn species_count(&self, species: Species) -> usize {
        self.penguins.iter().filter(|p| p.species == species).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_round_trips_through_display_and_from_str() {
        for sp in ALL_SPECIES {
            let parsed: Species = sp.to_string().parse().unwrap();
            assert_eq!(parsed, sp);
        }
    }

    #[test]
    fn unknown_species_is_a_parse_error() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert!(err.to_string().contains("Emperor"));
    }

    #[test]
    fn has_plot_fields_requires_all_three_measurements() {
        let mut p = Penguin {
            species: Species::Adelie,
            island: "Torgersen".to_string(),
            bill_length_mm: Some(39.1),
            bill_depth_mm: Some(18.7),
            flipper_length_mm: Some(181.0),
            body_mass_g: Some(3750.0),
            sex: Some("male".to_string()),
            year: Some(2007),
        };
        assert!(p.has_plot_fields());

        p.bill_depth_mm = None;
        assert!(!p.has_plot_fields());

        // flipper length is not plotted and must not affect the check
        p.bill_depth_mm = Some(18.7);
        p.flipper_length_mm = None;
        assert!(p.has_plot_fields());
    }
}
