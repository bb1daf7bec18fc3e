//! The `?state=XX` hand-off from the other pages to the map page.

use url::form_urlencoded;

pub const STATE_PARAM: &str = "state";

/// Page that hosts the map.
pub const EXPLORE_PAGE: &str = "index.html";

/// Delay before a deep-linked panel opens, giving the map time to draw.
pub const DEEP_LINK_DELAY_MS: u32 = 800;

/// Read the `state` parameter from a location search string.
///
/// Accepts the string with or without its leading `?`. Empty values are
/// treated as absent.
pub fn state_param(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == STATE_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Link to the map page with `abbreviation`'s panel open.
pub fn explore_href(abbreviation: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(STATE_PARAM, abbreviation)
        .finish();
    format!("{}?{}", EXPLORE_PAGE, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_state_parameter() {
        assert_eq!(state_param("?state=TX").as_deref(), Some("TX"));
        assert_eq!(state_param("state=NY").as_deref(), Some("NY"));
        assert_eq!(state_param("?metric=gdp&state=VT").as_deref(), Some("VT"));
    }

    #[test]
    fn missing_or_empty_parameter() {
        assert_eq!(state_param(""), None);
        assert_eq!(state_param("?"), None);
        assert_eq!(state_param("?state="), None);
        assert_eq!(state_param("?other=CA"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(state_param("?state=CA&state=TX").as_deref(), Some("CA"));
    }

    #[test]
    fn href_round_trips() {
        let href = explore_href("MS");
        assert_eq!(href, "index.html?state=MS");
        let search = href.trim_start_matches(EXPLORE_PAGE);
        assert_eq!(state_param(search).as_deref(), Some("MS"));
    }
}
