//! Merging and filtering of crop records.

use crate::model::crop::CropRecord;
use std::collections::HashMap;

/// Merges `added` into `base`, keeping one record per identity.
///
/// Two records are the same when they share a `document_id`, or else a
/// composite key. The later-merged record wins and takes the position of the
/// record it replaces; a replaced remote record hands its `document_id` to the
/// winner so that the merged record can still be deleted remotely.
pub fn merge_records(base: Vec<CropRecord>, added: Vec<CropRecord>) -> Vec<CropRecord> {
    let mut merged: Vec<CropRecord> = Vec::with_capacity(base.len() + added.len());
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut by_document: HashMap<String, usize> = HashMap::new();

    for mut record in base.into_iter().chain(added) {
        let existing = record
            .document_id
            .as_ref()
            .and_then(|id| by_document.get(id))
            .or_else(|| by_key.get(&record.composite_key()))
            .copied();

        match existing {
            Some(idx) => {
                let replaced = &merged[idx];
                log::debug!(
                    "merge: {} replaces {}",
                    record.composite_key(),
                    replaced.identity()
                );
                if record.document_id.is_none() {
                    record.document_id = replaced.document_id.clone();
                }
                by_key.remove(&replaced.composite_key());
                if let Some(id) = &replaced.document_id {
                    by_document.remove(id);
                }
                index(&mut by_key, &mut by_document, &record, idx);
                merged[idx] = record;
            }
            None => {
                index(&mut by_key, &mut by_document, &record, merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

fn index(
    by_key: &mut HashMap<String, usize>,
    by_document: &mut HashMap<String, usize>,
    record: &CropRecord,
    idx: usize,
) {
    by_key.insert(record.composite_key(), idx);
    if let Some(id) = &record.document_id {
        by_document.insert(id.clone(), idx);
    }
}

/// Season matches by substring ("春" matches "春,秋"); category matches exactly.
/// `None` or an empty filter keeps everything.
pub fn matches_filters(record: &CropRecord, season: Option<&str>, category: Option<&str>) -> bool {
    let season_ok = match season {
        Some(season) if !season.is_empty() => record.season.contains(season),
        _ => true,
    };
    let category_ok = match category {
        Some(category) if !category.is_empty() => record.category == category,
        _ => true,
    };
    season_ok && category_ok
}
