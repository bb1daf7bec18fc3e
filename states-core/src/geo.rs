//! Region code table for the map geometry.
//!
//! The boundary geometry identifies each feature by a two-digit numeric
//! region code. Only the 50 states and D.C. are in the table; any other code
//! has no renderable shape.

use std::collections::BTreeMap;

/// Region code to postal abbreviation, for every code the map draws.
pub static REGION_CODES: [(&str, &str); 51] = [
    ("01", "AL"), ("02", "AK"), ("04", "AZ"), ("05", "AR"), ("06", "CA"),
    ("08", "CO"), ("09", "CT"), ("10", "DE"), ("11", "DC"), ("12", "FL"),
    ("13", "GA"), ("15", "HI"), ("16", "ID"), ("17", "IL"), ("18", "IN"),
    ("19", "IA"), ("20", "KS"), ("21", "KY"), ("22", "LA"), ("23", "ME"),
    ("24", "MD"), ("25", "MA"), ("26", "MI"), ("27", "MN"), ("28", "MS"),
    ("29", "MO"), ("30", "MT"), ("31", "NE"), ("32", "NV"), ("33", "NH"),
    ("34", "NJ"), ("35", "NM"), ("36", "NY"), ("37", "NC"), ("38", "ND"),
    ("39", "OH"), ("40", "OK"), ("41", "OR"), ("42", "PA"), ("44", "RI"),
    ("45", "SC"), ("46", "SD"), ("47", "TN"), ("48", "TX"), ("49", "UT"),
    ("50", "VT"), ("51", "VA"), ("53", "WA"), ("54", "WV"), ("55", "WI"),
    ("56", "WY"),
];

/// Translate a geometry feature id to an abbreviation.
///
/// Ids may arrive unpadded (`"6"`) or padded (`"06"`).
pub fn abbreviation_for_code(code: &str) -> Option<&'static str> {
    let code = code.trim();
    if code.is_empty() || code.len() > 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0>2}", code);
    REGION_CODES
        .iter()
        .find(|(c, _)| *c == padded)
        .map(|(_, abbr)| *abbr)
}

/// Whether the map has a shape for this abbreviation.
pub fn has_geometry(abbreviation: &str) -> bool {
    REGION_CODES.iter().any(|(_, abbr)| *abbr == abbreviation)
}

/// The table as a map, for handing to the map script.
pub fn code_table() -> BTreeMap<&'static str, &'static str> {
    REGION_CODES.iter().copied().collect()
}
