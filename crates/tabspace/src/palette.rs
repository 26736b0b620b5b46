//! Command palette entries.
//!
//! The palette filters every open tab, across all spaces, by a
//! case-insensitive substring of its title or URL. Queries longer than two
//! characters also offer a web search that opens in a new tab.

use crate::browser::{BrowserState, Intent, TabId};

/// Counted on the raw query, surrounding whitespace included.
const SEARCH_MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEntry {
    Tab(TabId),
    SearchWeb(String),
}

impl PaletteEntry {
    pub fn intent(&self, search_prefix: &str) -> Intent {
        match self {
            PaletteEntry::Tab(id) => Intent::SelectTab(id.clone()),
            PaletteEntry::SearchWeb(query) => Intent::CreateTab {
                url: Some(web_search_url(search_prefix, query)),
            },
        }
    }

    pub fn label(&self, state: &BrowserState) -> String {
        match self {
            PaletteEntry::Tab(id) => state
                .tab(id)
                .map(|tab| format!("{}  {}", tab.title, tab.url))
                .unwrap_or_else(|| id.to_string()),
            PaletteEntry::SearchWeb(query) => format!("Search web for \"{query}\""),
        }
    }
}

pub fn palette_entries(state: &BrowserState, query: &str) -> Vec<PaletteEntry> {
    let needle = query.trim().to_lowercase();
    let mut entries: Vec<PaletteEntry> = state
        .tabs()
        .iter()
        .filter(|tab| {
            needle.is_empty()
                || tab.title.to_lowercase().contains(&needle)
                || tab.url.to_lowercase().contains(&needle)
        })
        .map(|tab| PaletteEntry::Tab(tab.id.clone()))
        .collect();
    if query.chars().count() >= SEARCH_MIN_QUERY_LEN {
        entries.push(PaletteEntry::SearchWeb(query.to_string()));
    }
    entries
}

pub fn web_search_url(prefix: &str, query: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::{palette_entries, web_search_url, PaletteEntry};
    use crate::browser::{BrowserState, Intent, TabId};

    const GOOGLE: &str = "https://www.google.com/search?q=";

    #[test]
    fn empty_query_lists_every_tab() {
        let state = BrowserState::seeded();
        let entries = palette_entries(&state, "");
        assert_eq!(entries.len(), state.tabs().len());
    }

    #[test]
    fn filter_matches_title_or_url_across_spaces() {
        let state = BrowserState::seeded();
        assert_eq!(
            palette_entries(&state, "TUBE"),
            vec![
                PaletteEntry::Tab(TabId::new("7")),
                PaletteEntry::SearchWeb("TUBE".to_string()),
            ]
        );
        assert_eq!(
            palette_entries(&state, "so"),
            vec![PaletteEntry::Tab(TabId::new("2"))]
        );
    }

    #[test]
    fn search_entry_needs_more_than_two_characters() {
        let state = BrowserState::seeded();
        let entries = palette_entries(&state, "zz");
        assert!(entries.is_empty());
        let entries = palette_entries(&state, "zzz");
        assert_eq!(entries, vec![PaletteEntry::SearchWeb("zzz".to_string())]);
    }

    #[test]
    fn search_entry_counts_untrimmed_characters() {
        let state = BrowserState::seeded();
        let entries = palette_entries(&state, "zz ");
        assert_eq!(entries, vec![PaletteEntry::SearchWeb("zz ".to_string())]);
        assert!(palette_entries(&state, " z").is_empty());
    }

    #[test]
    fn entries_map_to_intents() {
        assert_eq!(
            PaletteEntry::Tab(TabId::new("4")).intent(GOOGLE),
            Intent::SelectTab(TabId::new("4"))
        );
        assert_eq!(
            PaletteEntry::SearchWeb("rust traits".to_string()).intent(GOOGLE),
            Intent::CreateTab {
                url: Some("https://www.google.com/search?q=rust%20traits".to_string()),
            }
        );
    }

    #[test]
    fn web_search_url_encodes_query() {
        assert_eq!(
            web_search_url("https://duckduckgo.com/?q=", "a&b"),
            "https://duckduckgo.com/?q=a%26b"
        );
    }
}
