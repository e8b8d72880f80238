//! The two hooks a shapefile-to-OSM driver calls for every feature.

use crate::config::TranslationConfig;
use crate::filter::{Filtered, filter_feature_with};
use crate::record::SourceRecord;
use crate::tags::{Attributes, Tags, map_tags_with};
use std::path::Path;

pub trait Translation: Send + Sync {
    /// Decide whether a feature is translated at all.
    fn filter_feature<R: SourceRecord>(&self, record: Option<R>) -> Filtered<R>;

    /// Tags for the attributes of a kept feature, `None` if there are none.
    fn filter_tags(&self, attrs: Option<&Attributes>) -> Option<Tags>;
}

/// RABA-KGZ land-use translation.
#[derive(Debug, Clone, Default)]
pub struct RabaKgz {
    config: TranslationConfig,
}

impl RabaKgz {
    pub fn new(config: TranslationConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let config = TranslationConfig::load(path)?;
        tracing::info!(
            "Translation: {} ({}), field index policy {:?}",
            config.provenance.source,
            config.provenance.source_date,
            config.field_index_policy
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }
}

impl Translation for RabaKgz {
    fn filter_feature<R: SourceRecord>(&self, record: Option<R>) -> Filtered<R> {
        filter_feature_with(record, self.config.field_index_policy)
    }

    fn filter_tags(&self, attrs: Option<&Attributes>) -> Option<Tags> {
        map_tags_with(attrs, &self.config.provenance)
    }
}
