//! Projection of raw records into [`ChartLink`]s.

use crate::config::ShapeConfig;
use crate::model::{ChartLink, Record};

/// Reduces records to `{title, slug, url}`.
///
/// Every record yields exactly one link, in input order. Missing titles and
/// slugs become empty strings; an empty slug leaves the bare URL base.
#[derive(Debug, Clone, Default)]
pub struct Shaper {
    config: ShapeConfig,
}

impl Shaper {
    pub fn new(config: ShapeConfig) -> Self {
        Self { config }
    }

    pub fn shape_one(&self, record: &Record) -> ChartLink {
        let slug = record.slug();
        ChartLink {
            title: record.title().to_string(),
            slug: slug.to_string(),
            url: format!("{}{}", self.config.url_base, slug),
        }
    }

    pub fn shape(&self, records: &[Record]) -> Vec<ChartLink> {
        records.iter().map(|r| self.shape_one(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_shape_single_chart() {
        let input = records(json!([{"title": "A", "slug": "a"}]));

        let output = serde_json::to_value(Shaper::default().shape(&input)).unwrap();

        assert_eq!(
            output,
            json!([{"title": "A", "slug": "a", "url": "https://ourworldindata.org/grapher/a"}])
        );
    }

    #[test]
    fn test_shape_missing_slug_yields_bare_base() {
        let input = records(json!([{"title": "No slug here"}]));

        let links = Shaper::default().shape(&input);

        assert_eq!(links[0].slug, "");
        assert_eq!(links[0].url, "https://ourworldindata.org/grapher/");
    }

    #[test]
    fn test_shape_missing_title_and_empty_record() {
        let input = records(json!([{"slug": "co2"}, {}]));

        let links = Shaper::default().shape(&input);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "");
        assert_eq!(links[0].slug, "co2");
        assert_eq!(links[1].title, "");
        assert_eq!(links[1].slug, "");
    }

    #[test]
    fn test_shape_preserves_order_and_length() {
        let input = records(json!([
            {"title": "Z", "slug": "z", "type": "chart"},
            {"title": "A", "slug": "a"},
            {"title": "Dup", "slug": "a"},
            {"title": "M", "slug": "m"}
        ]));

        let links = Shaper::default().shape(&input);

        assert_eq!(links.len(), input.len());
        for (link, record) in links.iter().zip(&input) {
            assert_eq!(link.slug, record.slug());
            assert_eq!(link.title, record.title());
        }
    }

    #[test]
    fn test_shape_custom_url_base() {
        let shaper = Shaper::new(ShapeConfig::default().with_url_base("http://localhost/g/"));

        let link = shaper.shape_one(&records(json!([{"slug": "gdp"}]))[0]);

        assert_eq!(link.url, "http://localhost/g/gdp");
    }

    #[test]
    fn test_shape_empty_collection() {
        assert!(Shaper::default().shape(&[]).is_empty());
    }
}
