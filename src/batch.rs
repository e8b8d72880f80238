//! Filter-then-tag over a whole layer in parallel.

use geo_types::Geometry;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::classification::{LandCoverGroup, lookup};
use crate::filter::Filtered;
use crate::record::ShapeFeature;
use crate::tags::Tags;
use crate::translation::Translation;

/// A kept feature ready to be written out.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedFeature {
    pub geometry: Option<Geometry<f64>>,
    /// `None` when the feature had no attributes to translate.
    pub tags: Option<Tags>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
    pub untagged: usize,
    /// Kept features per land-cover group of their `raba:id`.
    pub groups: BTreeMap<LandCoverGroup, usize>,
    /// Distinct `raba:id` values missing from the classification table.
    pub unknown_codes: BTreeSet<String>,
}

#[derive(Debug)]
pub struct BatchOutput {
    pub features: Vec<TaggedFeature>,
    pub summary: BatchSummary,
}

/// Translate `features`, keeping input order among the kept ones.
pub fn translate_batch<T: Translation>(
    translation: &T,
    features: Vec<ShapeFeature>,
) -> BatchOutput {
    let total = features.len();
    let translated: Vec<Option<TaggedFeature>> = features
        .into_par_iter()
        .map(|feature| match translation.filter_feature(Some(feature)) {
            Filtered::Kept(feature) => {
                let tags = translation.filter_tags(Some(&feature.attributes()));
                Some(TaggedFeature {
                    geometry: feature.geometry,
                    tags,
                })
            }
            Filtered::Absent | Filtered::Dropped => None,
        })
        .collect();

    let mut summary = BatchSummary {
        total,
        ..BatchSummary::default()
    };
    let mut kept = Vec::with_capacity(translated.len());

    for feature in translated {
        let Some(feature) = feature else {
            summary.dropped += 1;
            continue;
        };
        match &feature.tags {
            Some(tags) => {
                if let Some(code) = tags.get("raba:id") {
                    match lookup(code) {
                        Some(classification) => {
                            *summary.groups.entry(classification.group).or_default() += 1;
                        }
                        None => {
                            summary.unknown_codes.insert(code.clone());
                        }
                    }
                }
            }
            None => summary.untagged += 1,
        }
        kept.push(feature);
    }
    summary.kept = kept.len();

    tracing::info!(
        "Batch: {} features, {} kept, {} dropped, {} untagged",
        summary.total,
        summary.kept,
        summary.dropped,
        summary.untagged
    );
    for (group, count) in &summary.groups {
        tracing::info!("Batch: {}: {}", group, count);
    }
    if !summary.unknown_codes.is_empty() {
        tracing::warn!(
            "Batch: unknown RABA_ID codes: {}",
            summary
                .unknown_codes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    BatchOutput {
        features: kept,
        summary,
    }
}
