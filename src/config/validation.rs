use crate::config::types::{Config, ScraperConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_source_config(&config.source)?;
    Ok(())
}

/// Validates scraper configuration
///
/// `last_page` below `first_page` is deliberately accepted: it yields an
/// empty work queue and the run completes with zero stories.
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.first_page < 1 {
        return Err(ConfigError::Validation(format!(
            "first_page must be >= 1, got {}",
            config.first_page
        )));
    }

    if config.workers < 1 || config.workers > 64 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 64, got {}",
            config.workers
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates source URL templates
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    validate_template(&config.listing_url, "{page}", "listing-url")?;
    validate_template(&config.item_url, "{id}", "item-url")?;
    Ok(())
}

/// Validates a URL template: it must contain its placeholder and produce a
/// parseable http(s) URL once the placeholder is substituted
fn validate_template(template: &str, placeholder: &str, name: &str) -> Result<(), ConfigError> {
    if !template.contains(placeholder) {
        return Err(ConfigError::Validation(format!(
            "{} must contain the {} placeholder, got '{}'",
            name, placeholder, template
        )));
    }

    let sample = template.replace(placeholder, "1");
    let url = Url::parse(&sample)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} template '{}': {}", name, template, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must be an http(s) URL, got scheme '{}'",
            name,
            url.scheme()
        )));
    }

    Ok(())
}
