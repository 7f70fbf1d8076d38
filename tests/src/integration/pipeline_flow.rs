//! # Pipeline Flow Integration Tests
//!
//! Runs cr-01-metadata-extraction and cr-02-curriculum-ordering back to back
//! against real files, the way pipeline-runtime wires them: the pool is
//! projected into a metadata store, and the store then drives per-module
//! ordering of the aggregated items.

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use cr_01_metadata_extraction::{
        FsContentPool, FsMetadataStore, MetadataExtractionApi, MetadataExtractionService,
    };
    use cr_02_curriculum_ordering::{
        CurriculumOrderingApi, CurriculumOrderingService, FsAggregatedItems, FsCurriculumWriter,
        FsMetadataSource, FsPrerequisiteGraph,
    };
    use shared_items::AggregatedItem;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// A small CSS pool: three theory items forming a chain, one question,
    /// and one task flagged irrelevant.
    const CONTENT_POOL: &str = r#"[
        {
            "id": "container-css",
            "content": {
                "theory": [
                    {"id": "box-model", "title": "The box model", "complexity": 2, "interviewRelevance": 8, "tags": ["css"]},
                    {"id": "flexbox", "complexity": 3, "interviewRelevance": 9, "tags": ["css", "layout"], "prerequisites": ["box-model"]},
                    {"id": "grid", "complexity": 4, "interviewRelevance": 9, "tags": ["css", "layout"], "prerequisites": ["flexbox"]}
                ],
                "questions": [
                    {"id": "q-selectors", "question": "What does .a > .b select?", "complexity": 1, "interviewFrequency": 7}
                ],
                "tasks": [
                    {"id": "t-float-layout", "description": "Build a float layout", "complexity": 5, "interviewFrequency": 2, "irrelevant": true}
                ]
            }
        }
    ]"#;

    const AGGREGATED_ITEMS: &str = r#"[
        {"index": 0, "moduleId": "css", "id": "grid", "title": "Grid layout"},
        {"index": 1, "moduleId": "css", "id": "box-model"},
        {"index": 2, "moduleId": "css", "id": "flexbox"},
        {"index": 3, "moduleId": "css", "id": "q-selectors"}
    ]"#;

    /// Declares one edge the metadata already knows plus nothing new, so the
    /// union-and-dedup path is exercised.
    const DEPENDENCY_GRAPH: &str = r#"{
        "dependency": {
            "nodes": {
                "grid": {"prerequisites": ["flexbox"]}
            }
        }
    }"#;

    struct StagedPipeline {
        pool: PathBuf,
        metadata: PathBuf,
        aggregated: PathBuf,
        graph: PathBuf,
        output: PathBuf,
    }

    fn stage(dir: &Path) -> StagedPipeline {
        let staged = StagedPipeline {
            pool: dir.join("content-pool.json"),
            metadata: dir.join("items-metadata.json"),
            aggregated: dir.join("aggregated-items.json"),
            graph: dir.join("dependency-graph.json"),
            output: dir.join("ordered-items.json"),
        };
        std::fs::write(&staged.pool, CONTENT_POOL).unwrap();
        std::fs::write(&staged.aggregated, AGGREGATED_ITEMS).unwrap();
        std::fs::write(&staged.graph, DEPENDENCY_GRAPH).unwrap();
        staged
    }

    async fn run_extraction(staged: &StagedPipeline) -> shared_items::ExtractionStats {
        let service = MetadataExtractionService::new(
            FsContentPool::new(&staged.pool),
            FsMetadataStore::new(&staged.metadata),
        );
        service.extract().await.expect("extraction should succeed")
    }

    async fn run_ordering(
        staged: &StagedPipeline,
    ) -> cr_02_curriculum_ordering::OrderingReport {
        let service = CurriculumOrderingService::new(
            FsAggregatedItems::new(&staged.aggregated),
            FsMetadataSource::new(&staged.metadata),
            FsPrerequisiteGraph::new(&staged.graph),
            FsCurriculumWriter::new(&staged.output),
        );
        service.order().await.expect("ordering should succeed")
    }

    fn ordered_ids(staged: &StagedPipeline) -> Vec<String> {
        let items: Vec<AggregatedItem> =
            serde_json::from_str(&std::fs::read_to_string(&staged.output).unwrap()).unwrap();
        items.into_iter().filter_map(|i| i.id).collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: EXTRACTION -> ORDERING
    // =============================================================================

    /// The full pipeline: extraction counts and filters the pool, ordering
    /// respects the chained prerequisites and breaks the initial tie on
    /// complexity.
    #[tokio::test]
    async fn full_pipeline_orders_by_prerequisites_and_complexity() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage(dir.path());

        // Extraction: the irrelevant task is filtered, everything else counted.
        let stats = run_extraction(&staged).await;
        assert_eq!(stats.theory_items, 3);
        assert_eq!(stats.question_items, 1);
        assert_eq!(stats.task_items, 0);
        assert_eq!(stats.total_items, 4);

        // Ordering: q-selectors (complexity 1) beats box-model (2) among the
        // initially ready items; the chain then unlocks in declared order.
        let report = run_ordering(&staged).await;
        assert_eq!(report.module_count, 1);
        assert_eq!(report.total_items, 4);
        assert_eq!(report.resolved_items, 4);
        assert_eq!(report.fallback_items, 0);

        assert_eq!(
            ordered_ids(&staged),
            vec!["q-selectors", "box-model", "flexbox", "grid"]
        );
    }

    /// Fields the orderer does not interpret must survive the round trip
    /// into the final artifact untouched.
    #[tokio::test]
    async fn unknown_item_fields_survive_the_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage(dir.path());

        run_extraction(&staged).await;
        run_ordering(&staged).await;

        let items: Vec<AggregatedItem> =
            serde_json::from_str(&std::fs::read_to_string(&staged.output).unwrap()).unwrap();
        let grid = items
            .iter()
            .find(|i| i.id.as_deref() == Some("grid"))
            .expect("grid survives ordering");
        assert_eq!(
            grid.extra.get("title").and_then(|v| v.as_str()),
            Some("Grid layout")
        );
    }

    /// Re-running both stages on unchanged inputs must reproduce the output
    /// artifact byte for byte.
    #[tokio::test]
    async fn pipeline_is_idempotent_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage(dir.path());

        run_extraction(&staged).await;
        run_ordering(&staged).await;
        let first_metadata = std::fs::read(&staged.metadata).unwrap();
        let first_output = std::fs::read(&staged.output).unwrap();

        run_extraction(&staged).await;
        run_ordering(&staged).await;
        let second_metadata = std::fs::read(&staged.metadata).unwrap();
        let second_output = std::fs::read(&staged.output).unwrap();

        assert_eq!(first_metadata, second_metadata);
        assert_eq!(first_output, second_output);
    }

    /// Dirty identifiers at the aggregation boundary: a duplicated id and an
    /// anonymous item still come out, trailing their module.
    #[tokio::test]
    async fn dirty_identifiers_are_never_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage(dir.path());
        std::fs::write(
            &staged.aggregated,
            r#"[
                {"index": 0, "moduleId": "css", "id": "box-model"},
                {"index": 1, "moduleId": "css", "id": "box-model"},
                {"index": 2, "moduleId": "css"},
                {"index": 3, "moduleId": "css", "id": "grid"}
            ]"#,
        )
        .unwrap();

        run_extraction(&staged).await;
        let report = run_ordering(&staged).await;

        assert_eq!(report.total_items, 4);
        assert_eq!(report.duplicate_id_items, 1);
        assert_eq!(report.missing_id_items, 1);
        assert_eq!(report.resolved_items + report.fallback_items, 4);

        let items: Vec<AggregatedItem> =
            serde_json::from_str(&std::fs::read_to_string(&staged.output).unwrap()).unwrap();
        assert_eq!(items.len(), 4);
        let mut indexes: Vec<u64> = items.iter().map(|i| i.index).collect();
        indexes.sort_unstable();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    /// Items from modules never seen in metadata order fine: module grouping
    /// comes from the aggregation alone.
    #[tokio::test]
    async fn modules_follow_first_seen_aggregation_order() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage(dir.path());
        std::fs::write(
            &staged.aggregated,
            r#"[
                {"index": 0, "moduleId": "js", "id": "closures"},
                {"index": 1, "moduleId": "css", "id": "grid"},
                {"index": 2, "moduleId": "js", "id": "hoisting"},
                {"index": 3, "id": "orphaned"}
            ]"#,
        )
        .unwrap();

        run_extraction(&staged).await;
        let report = run_ordering(&staged).await;

        // js first, then css, then the implicit default module.
        assert_eq!(report.module_count, 3);
        let ids = ordered_ids(&staged);
        let js_pos = ids.iter().position(|i| i == "closures").unwrap();
        let css_pos = ids.iter().position(|i| i == "grid").unwrap();
        let default_pos = ids.iter().position(|i| i == "orphaned").unwrap();
        assert!(js_pos < css_pos);
        assert!(css_pos < default_pos);
    }
}
