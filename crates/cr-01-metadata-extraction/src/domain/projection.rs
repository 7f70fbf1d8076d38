//! Pool-to-metadata projection
//!
//! The pure core of the extraction stage: walks every container array in
//! authored order and derives one `MetadataRecord` per eligible item.

use shared_items::{
    ContainerContent, ItemKind, LearningPath, MetadataRecord, MetadataStore, PoolContainer,
};
use tracing::warn;

/// Projects the raw pool into the metadata store.
///
/// Items flagged `irrelevant` are excluded; every other item counts toward
/// the per-kind statistics regardless of payload completeness. Items without
/// an identifier cannot be lookup targets, so they contribute to the counts
/// but produce no record.
///
/// `originalIndex` is assigned from a single counter that advances for every
/// scanned item, so positions stay collision-free no matter how large a
/// container grows.
pub fn project_pool(containers: &[PoolContainer]) -> MetadataStore {
    let mut store = MetadataStore::default();
    let mut scan_position: u64 = 0;

    for container in containers {
        let ContainerContent {
            theory,
            questions,
            tasks,
        } = &container.content;

        for item in theory {
            let position = scan_position;
            scan_position += 1;
            if item.irrelevant {
                continue;
            }
            store.stats.theory_items += 1;
            store.stats.total_items += 1;
            push_record(
                &mut store,
                build_record(
                    &item.id,
                    ItemKind::Theory,
                    item.complexity,
                    item.interview_relevance,
                    None,
                    &item.tags,
                    item.learning_path,
                    &item.prerequisites,
                    position,
                ),
                ItemKind::Theory,
                position,
            );
        }

        for item in questions {
            let position = scan_position;
            scan_position += 1;
            if item.irrelevant {
                continue;
            }
            store.stats.question_items += 1;
            store.stats.total_items += 1;
            push_record(
                &mut store,
                build_record(
                    &item.id,
                    ItemKind::Question,
                    item.complexity,
                    None,
                    item.interview_frequency,
                    &item.tags,
                    item.learning_path,
                    &item.prerequisites,
                    position,
                ),
                ItemKind::Question,
                position,
            );
        }

        for item in tasks {
            let position = scan_position;
            scan_position += 1;
            if item.irrelevant {
                continue;
            }
            store.stats.task_items += 1;
            store.stats.total_items += 1;
            push_record(
                &mut store,
                build_record(
                    &item.id,
                    ItemKind::Task,
                    item.complexity,
                    None,
                    item.interview_frequency,
                    &item.tags,
                    item.learning_path,
                    &item.prerequisites,
                    position,
                ),
                ItemKind::Task,
                position,
            );
        }
    }

    store
}

#[allow(clippy::too_many_arguments)]
fn build_record(
    id: &Option<String>,
    kind: ItemKind,
    complexity: Option<u8>,
    interview_relevance: Option<u8>,
    interview_frequency: Option<u8>,
    tags: &[String],
    learning_path: Option<LearningPath>,
    prerequisites: &[String],
    original_index: u64,
) -> Option<MetadataRecord> {
    let id = id.as_deref().filter(|id| !id.is_empty())?;
    Some(MetadataRecord {
        id: id.to_string(),
        kind,
        complexity,
        interview_relevance,
        interview_frequency,
        tags: tags.to_vec(),
        learning_path,
        prerequisites: prerequisites.to_vec(),
        original_index,
    })
}

fn push_record(
    store: &mut MetadataStore,
    record: Option<MetadataRecord>,
    kind: ItemKind,
    position: u64,
) {
    match record {
        Some(record) => store.items.push(record),
        None => warn!(
            kind = kind.as_str(),
            position, "Pool item has no id; counted but not recorded"
        ),
    }
}
