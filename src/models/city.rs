use std::path::{Path, PathBuf};

/// A supported city and the CSV file holding its trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub key: &'static str,
    pub file_name: String,
}

impl City {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            file_name: format!("{}.csv", key.replace(' ', "_")),
        }
    }

    pub fn path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file_name)
    }
}

/// Fixed city → file lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl CityCatalog {
    pub fn standard() -> Self {
        Self {
            cities: vec![
                City::new("chicago"),
                City::new("new york city"),
                City::new("washington"),
            ],
        }
    }

    /// Look up a city by name, ignoring case and surrounding whitespace.
    pub fn resolve(&self, selector: &str) -> Option<&City> {
        let wanted = selector.trim();
        self.cities
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(wanted))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.cities.iter().map(|c| c.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }
}
