use std::num::NonZeroU32;

pub const DEFAULT_SEARCH_URL: &str = "https://ourworldindata.org/api/search";
pub const DEFAULT_GRAPHER_URL: &str = "https://ourworldindata.org/grapher/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; owid-chart-explorer/1.0)";
pub const DEFAULT_RESULT_TYPE: &str = "charts";

const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Search endpoint configuration handed to the harvester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: String,
    /// Value of the `type` query parameter.
    pub result_type: String,
    /// Value of the `hitsPerPage` query parameter.
    pub page_size: NonZeroU32,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_URL.to_string(),
            result_type: DEFAULT_RESULT_TYPE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = result_type.into();
        self
    }

    pub fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Shaper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeConfig {
    /// Prefix the slug is appended to, verbatim.
    pub url_base: String,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            url_base: DEFAULT_GRAPHER_URL.to_string(),
        }
    }
}

impl ShapeConfig {
    pub fn with_url_base(mut self, url_base: impl Into<String>) -> Self {
        self.url_base = url_base.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://ourworldindata.org/api/search");
        assert_eq!(config.result_type, "charts");
        assert_eq!(config.page_size.get(), 100);
        assert!(config.user_agent.contains("owid-chart-explorer"));
    }

    #[test]
    fn test_search_config_builders() {
        let config = SearchConfig::default()
            .with_base_url("http://localhost:8080/search")
            .with_result_type("articles")
            .with_page_size(NonZeroU32::new(25).unwrap())
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:8080/search");
        assert_eq!(config.result_type, "articles");
        assert_eq!(config.page_size.get(), 25);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_shape_config_defaults() {
        let config = ShapeConfig::default();
        assert_eq!(config.url_base, "https://ourworldindata.org/grapher/");
        assert_eq!(
            config.with_url_base("http://x/").url_base,
            "http://x/"
        );
    }
}
