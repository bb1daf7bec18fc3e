//! Data source citations.
//!
//! Two lists feed the sources page: a fixed citation table (ids 1..=8, used
//! for the `[n]` superscripts next to every statistic) and whatever extra
//! entries the dataset carries. The dataset entries are loosely typed and may
//! spell their keys either as display names (`URL`, `Source Name`,
//! `Data Category`) or in lower case (`url`, `name`, `category`).

use serde_json::Value;
use std::collections::HashSet;

/// Keys into the fixed citation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationKey {
    Gdp,
    Income,
    Unemployment,
    Population,
    Obesity,
    Uninsured,
    LifeExpectancy,
    Industry,
}

/// An entry of the fixed citation table.
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub key: CitationKey,
    pub id: u32,
    pub label: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

/// The fixed citation table, in id order.
pub static CITATIONS: [Citation; 8] = [
    Citation {
        key: CitationKey::Gdp,
        id: 1,
        label: "BEA — GDP by State",
        category: "Economics",
        url: "https://www.bea.gov/data/gdp/gdp-state",
    },
    Citation {
        key: CitationKey::Income,
        id: 2,
        label: "Census ACS — Median Household Income",
        category: "Economics",
        url: "https://data.census.gov/table/ACSST1Y2023.S1901",
    },
    Citation {
        key: CitationKey::Unemployment,
        id: 3,
        label: "BLS — Local Area Unemployment Statistics",
        category: "Economics",
        url: "https://www.bls.gov/lau/",
    },
    Citation {
        key: CitationKey::Population,
        id: 4,
        label: "Census — Population Estimates Program",
        category: "Demographics",
        url: "https://www.census.gov/programs-surveys/popest.html",
    },
    Citation {
        key: CitationKey::Obesity,
        id: 5,
        label: "CDC — Adult Obesity Prevalence Maps",
        category: "Health",
        url: "https://www.cdc.gov/obesity/data-and-statistics/adult-obesity-prevalence-maps.html",
    },
    Citation {
        key: CitationKey::Uninsured,
        id: 6,
        label: "Census — Health Insurance Coverage",
        category: "Health",
        url: "https://www2.census.gov/library/publications/2025/demo/acsbr-024.pdf",
    },
    Citation {
        key: CitationKey::LifeExpectancy,
        id: 7,
        label: "CDC NCHS — Life Expectancy by State",
        category: "Health",
        url: "https://www.cdc.gov/nchs/pressroom/states.htm",
    },
    Citation {
        key: CitationKey::Industry,
        id: 8,
        label: "BLS — Quarterly Census of Employment and Wages",
        category: "Economics",
        url: "https://www.bls.gov/cew/",
    },
];

impl CitationKey {
    /// The table is declared in variant order.
    pub fn citation(self) -> &'static Citation {
        &CITATIONS[self as usize]
    }
}

/// Category used when a dataset entry does not name one.
pub const DEFAULT_CATEGORY: &str = "Reference";

/// One row of the merged source list.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub id: u32,
    pub label: String,
    pub category: String,
    pub url: String,
}

/// Sources sharing a category, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    pub category: String,
    pub records: Vec<SourceRecord>,
}

/// The fixed citation table merged with the dataset's own sources.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRegistry {
    records: Vec<SourceRecord>,
}

impl SourceRegistry {
    /// Merge the citation table with raw dataset entries.
    ///
    /// Dataset entry `i` (0-based, counted before filtering) gets id
    /// `CITATIONS.len() + i + 1`. Entries without a URL, or whose URL was
    /// already seen, are dropped; the citation table always wins.
    pub fn merge(raw: &[Value]) -> Self {
        let mut records: Vec<SourceRecord> = CITATIONS
            .iter()
            .map(|c| SourceRecord {
                id: c.id,
                label: c.label.to_string(),
                category: c.category.to_string(),
                url: c.url.to_string(),
            })
            .collect();
        let mut seen: HashSet<String> = records.iter().map(|r| r.url.clone()).collect();
        let base = CITATIONS.len() as u32;

        for (i, entry) in raw.iter().enumerate() {
            let Some(url) = first_non_empty(entry, &["URL", "url"]) else {
                continue;
            };
            if !seen.insert(url.to_string()) {
                log::info!("[States] sources: skipping duplicate url {}", url);
                continue;
            }
            let label = first_non_empty(entry, &["Source Name", "name"]).unwrap_or(url);
            let category =
                first_non_empty(entry, &["Data Category", "category"]).unwrap_or(DEFAULT_CATEGORY);
            records.push(SourceRecord {
                id: base + i as u32 + 1,
                label: label.to_string(),
                category: category.to_string(),
                url: url.to_string(),
            });
        }

        Self { records }
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    /// Group records by category, keeping first-seen category order.
    pub fn grouped(&self) -> Vec<SourceGroup> {
        let mut groups: Vec<SourceGroup> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|g| g.category == record.category) {
                Some(group) => group.records.push(record.clone()),
                None => groups.push(SourceGroup {
                    category: record.category.clone(),
                    records: vec![record.clone()],
                }),
            }
        }
        groups
    }
}

fn first_non_empty<'a>(entry: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| entry.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}
