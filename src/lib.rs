//! RABA-KGZ to OpenStreetMap translation.
//!
//! Drops built-up polygons from the Slovenian agricultural land-use
//! register and maps the remaining features' attributes to OSM tags.
//! Reading the shapefile and writing OSM XML are left to the driver.

pub mod batch;
pub mod classification;
pub mod config;
pub mod filter;
pub mod logging;
pub mod record;
pub mod tags;
pub mod translation;

pub use batch::{BatchOutput, BatchSummary, TaggedFeature, translate_batch};
pub use config::{FieldIndexPolicy, ProvenanceConfig, TranslationConfig};
pub use filter::{Filtered, filter_feature, filter_feature_with};
pub use record::{FieldValue, ShapeFeature, SourceRecord};
pub use tags::{Attributes, Tags, map_tags, map_tags_with};
pub use translation::{RabaKgz, Translation};
