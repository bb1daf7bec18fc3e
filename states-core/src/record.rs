//! The per-state record and its JSON wire format.
//!
//! The dataset file stores industries and employers as a single
//! comma-joined string and fun facts as three flat `funFactN` /
//! `funFactNSource` pairs. Both are normalised here, once, at load time.

use serde::Deserialize;

/// Number of fun-fact slots a record can carry.
pub const FACT_SLOTS: usize = 3;

/// One fun fact with its optional source link.
#[derive(Debug, Clone, PartialEq)]
pub struct FunFact {
    pub text: String,
    pub source: Option<String>,
}

/// Per-state source links written by the dataset extraction script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSources {
    pub economic: Option<String>,
    pub obesity: Option<String>,
    pub uninsured: Option<String>,
    pub life_expectancy: Option<String>,
    pub industry: Option<String>,
}

/// A single U.S. state (or territory) as represented in the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "StateRecordWire")]
pub struct StateRecord {
    /// Two-letter postal code, the join key for every view.
    pub abbreviation: String,
    pub name: String,
    pub capital: String,
    pub region: String,
    /// Total GDP in billions of dollars.
    pub gdp: Option<f64>,
    pub gdp_per_capita: Option<f64>,
    pub median_income: Option<f64>,
    pub population: Option<f64>,
    /// Annual population change in percent.
    pub pop_change: Option<f64>,
    pub unemployment_rate: Option<f64>,
    pub obesity_rate: Option<f64>,
    pub uninsured_rate: Option<f64>,
    /// Life expectancy at birth in years.
    pub life_expectancy: Option<f64>,
    pub top_industries: Vec<String>,
    pub major_employers: Vec<String>,
    pub facts: [Option<FunFact>; FACT_SLOTS],
    pub sources: StateSources,
}

impl StateRecord {
    /// Present facts with their 1-based slot number.
    pub fn facts(&self) -> impl Iterator<Item = (usize, &FunFact)> {
        self.facts
            .iter()
            .enumerate()
            .filter_map(|(i, fact)| fact.as_ref().map(|f| (i + 1, f)))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRecordWire {
    abbreviation: String,
    name: String,
    capital: Option<String>,
    region: Option<String>,
    gdp: Option<f64>,
    gdp_per_capita: Option<f64>,
    median_income: Option<f64>,
    population: Option<f64>,
    pop_change: Option<f64>,
    unemployment_rate: Option<f64>,
    obesity_rate: Option<f64>,
    uninsured_rate: Option<f64>,
    life_expectancy: Option<f64>,
    top_industries: Option<String>,
    major_employers: Option<String>,
    fun_fact1: Option<String>,
    fun_fact1_source: Option<String>,
    fun_fact2: Option<String>,
    fun_fact2_source: Option<String>,
    fun_fact3: Option<String>,
    fun_fact3_source: Option<String>,
    sources: Option<StateSources>,
}

impl From<StateRecordWire> for StateRecord {
    fn from(w: StateRecordWire) -> Self {
        StateRecord {
            abbreviation: w.abbreviation.trim().to_string(),
            name: w.name,
            capital: w.capital.unwrap_or_default(),
            region: w.region.unwrap_or_default(),
            gdp: w.gdp,
            gdp_per_capita: w.gdp_per_capita,
            median_income: w.median_income,
            population: w.population,
            pop_change: w.pop_change,
            unemployment_rate: w.unemployment_rate,
            obesity_rate: w.obesity_rate,
            uninsured_rate: w.uninsured_rate,
            life_expectancy: w.life_expectancy,
            top_industries: split_list(w.top_industries.as_deref().unwrap_or("")),
            major_employers: split_list(w.major_employers.as_deref().unwrap_or("")),
            facts: [
                fun_fact(w.fun_fact1, w.fun_fact1_source),
                fun_fact(w.fun_fact2, w.fun_fact2_source),
                fun_fact(w.fun_fact3, w.fun_fact3_source),
            ],
            sources: w.sources.unwrap_or_default(),
        }
    }
}

/// Split a comma-joined list into trimmed, non-empty tokens in source order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn fun_fact(text: Option<String>, source: Option<String>) -> Option<FunFact> {
    let text = text.filter(|t| !t.trim().is_empty())?;
    let source = source.filter(|s| !s.trim().is_empty());
    Some(FunFact { text, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> StateRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn split_list_trims_and_drops_empty_tokens() {
        assert_eq!(
            split_list("Technology, Entertainment,Agriculture, , Tourism"),
            vec!["Technology", "Entertainment", "Agriculture", "Tourism"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn record_parses_camel_case_fields() {
        let record = parse(
            r#"{"name":"Ohio","abbreviation":"OH","capital":"Columbus","region":"Midwest",
                "gdpPerCapita":70000,"medianIncome":67769,"lifeExpectancy":75.3,
                "topIndustries":"Manufacturing, Healthcare","majorEmployers":null}"#,
        );
        assert_eq!(record.abbreviation, "OH");
        assert_eq!(record.gdp_per_capita, Some(70000.0));
        assert_eq!(record.life_expectancy, Some(75.3));
        assert_eq!(record.gdp, None);
        assert_eq!(record.top_industries, vec!["Manufacturing", "Healthcare"]);
        assert!(record.major_employers.is_empty());
        assert_eq!(record.sources, StateSources::default());
    }

    #[test]
    fn empty_facts_are_absent_and_slots_keep_their_number() {
        let record = parse(
            r#"{"name":"Iowa","abbreviation":"IA",
                "funFact1":"","funFact1Source":"https://a.example",
                "funFact2":"Iowa grows a lot of corn.","funFact2Source":"",
                "funFact3":"Iowa has 99 counties.","funFact3Source":"https://b.example"}"#,
        );
        let facts: Vec<_> = record.facts().collect();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].0, 2);
        assert_eq!(facts[0].1.source, None);
        assert_eq!(facts[1].0, 3);
        assert_eq!(facts[1].1.source.as_deref(), Some("https://b.example"));
        assert!(record.facts[0].is_none());
    }

    #[test]
    fn missing_identity_fields_default_to_empty() {
        let record = parse(r#"{"name":"Guam","abbreviation":" GU "}"#);
        assert_eq!(record.abbreviation, "GU");
        assert_eq!(record.capital, "");
        assert_eq!(record.region, "");
    }
}
