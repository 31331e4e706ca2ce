use serde::Deserialize;

/// Main configuration structure for storyrake
///
/// Every field has a documented default matching the stock Hacker News
/// setup, so a partial (or absent) configuration file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub source: SourceConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// First listing page to visit, inclusive (default 1)
    #[serde(rename = "first-page")]
    pub first_page: u32,

    /// Last listing page to visit, inclusive (default 100)
    ///
    /// A value below `first-page` yields an empty work queue.
    #[serde(rename = "last-page")]
    pub last_page: u32,

    /// Number of parallel workers in pooled mode (default 8)
    pub workers: u32,

    /// Total per-request timeout in seconds (default 100)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            first_page: 1,
            last_page: 100,
            workers: 8,
            request_timeout_secs: 100,
        }
    }
}

/// Source site URL templates
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Listing endpoint template; `{page}` is replaced with the page number
    #[serde(rename = "listing-url")]
    pub listing_url: String,

    /// Item endpoint template; `{id}` is replaced with the story id
    #[serde(rename = "item-url")]
    pub item_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://news.ycombinator.com/news?p={page}".to_string(),
            item_url: "https://news.ycombinator.com/item?id={id}".to_string(),
        }
    }
}

impl Config {
    /// Builds the listing-page URL for the given page number
    pub fn listing_url(&self, page: u32) -> String {
        self.source.listing_url.replace("{page}", &page.to_string())
    }

    /// Builds the item-detail URL for the given story id
    pub fn item_url(&self, id: &str) -> String {
        self.source.item_url.replace("{id}", id)
    }

    /// Returns all listing-page URLs in ascending page order
    pub fn listing_pages(&self) -> Vec<String> {
        (self.scraper.first_page..=self.scraper.last_page)
            .map(|page| self.listing_url(page))
            .collect()
    }
}
