//! # Curricula Ordering Benchmarks
//!
//! Performance validation for the pipeline stages:
//!
//! | Stage | Claim | Target |
//! |-------|-------|--------|
//! | cr-01 extraction | Linear pool scan | < 50ms for 5k items |
//! | cr-02 grouping | Single pass over input | < 10ms for 10k items |
//! | cr-02 ordering | Re-sorted ready set stays cheap | < 100ms per 1k-item module |
//!
//! Module sizes in production are tens to low hundreds of items; the 1k runs
//! exist to show the re-sort-on-pop simplification does not blow up first.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;

use cr_01_metadata_extraction::project_pool;
use cr_02_curriculum_ordering::algorithms::{group_by_module, order_module};
use cr_02_curriculum_ordering::{ModuleGroup, OrderingConfig, PrerequisiteGraph};
use shared_items::{
    AggregatedItem, ContainerContent, ItemKind, MetadataRecord, PoolContainer, QuestionItem,
    TheoryItem,
};

// ============================================================================
// Fixture builders
// ============================================================================

fn make_item(index: u64, id: &str) -> AggregatedItem {
    AggregatedItem {
        index,
        module_id: Some("bench".to_string()),
        id: Some(id.to_string()),
        complexity: None,
        extra: serde_json::Map::new(),
    }
}

fn make_record(id: &str, complexity: u8, relevance: u8, prerequisites: Vec<String>) -> MetadataRecord {
    MetadataRecord {
        id: id.to_string(),
        kind: ItemKind::Theory,
        complexity: Some(complexity),
        interview_relevance: Some(relevance),
        interview_frequency: None,
        tags: vec!["bench".to_string()],
        learning_path: None,
        prerequisites,
        original_index: 0,
    }
}

fn bench_group(size: usize) -> ModuleGroup {
    ModuleGroup {
        module_id: "bench".to_string(),
        items: (0..size).map(|i| make_item(i as u64, &format!("n{i}"))).collect(),
    }
}

// ============================================================================
// CR-02: Module ordering benchmarks
// ============================================================================

fn bench_module_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("cr-02-module-ordering");
    group.measurement_time(Duration::from_secs(10));

    let config = OrderingConfig::default();
    let graph = PrerequisiteGraph::empty();
    let sizes = [50, 200, 1000];

    // Worst-case sequential unlock: item i requires item i-1, so the ready
    // set never holds more than one element.
    for size in sizes {
        let records: Vec<MetadataRecord> = (0..size)
            .map(|i| {
                let prereqs = if i == 0 { vec![] } else { vec![format!("n{}", i - 1)] };
                make_record(&format!("n{i}"), (i % 10) as u8 + 1, 5, prereqs)
            })
            .collect();
        let lookup: HashMap<&str, &MetadataRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();
        let module = bench_group(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_chain", size), &module, |b, m| {
            b.iter(|| black_box(order_module(m.clone(), &lookup, &graph, &config)))
        });
    }

    // Random DAG: up to three prerequisites per item, always pointing at
    // earlier items so the graph stays acyclic.
    for size in sizes {
        let mut rng = rand::thread_rng();
        let records: Vec<MetadataRecord> = (0..size)
            .map(|i| {
                let prereq_count = if i == 0 { 0 } else { rng.gen_range(0..=3.min(i)) };
                let prereqs = (0..prereq_count)
                    .map(|_| format!("n{}", rng.gen_range(0..i)))
                    .collect();
                make_record(
                    &format!("n{i}"),
                    rng.gen_range(1..=10),
                    rng.gen_range(1..=10),
                    prereqs,
                )
            })
            .collect();
        let lookup: HashMap<&str, &MetadataRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();
        let module = bench_group(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_random_dag", size), &module, |b, m| {
            b.iter(|| black_box(order_module(m.clone(), &lookup, &graph, &config)))
        });
    }

    // No edges at all: every item is ready from the start, so each pop
    // re-sorts the full remaining set. This is the tie-break cascade's
    // worst case.
    for size in sizes {
        let mut rng = rand::thread_rng();
        let records: Vec<MetadataRecord> = (0..size)
            .map(|i| {
                make_record(
                    &format!("n{i}"),
                    rng.gen_range(1..=10),
                    rng.gen_range(1..=10),
                    vec![],
                )
            })
            .collect();
        let lookup: HashMap<&str, &MetadataRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();
        let module = bench_group(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_all_ready", size), &module, |b, m| {
            b.iter(|| black_box(order_module(m.clone(), &lookup, &graph, &config)))
        });
    }

    // Every item in a 2-cycle: nothing resolves and the whole module takes
    // the complexity-sorted fallback path.
    for size in sizes {
        let records: Vec<MetadataRecord> = (0..size)
            .map(|i| {
                let partner = if i % 2 == 0 { i + 1 } else { i - 1 };
                let prereqs = if partner < size { vec![format!("n{partner}")] } else { vec![] };
                make_record(&format!("n{i}"), (i % 10) as u8 + 1, 5, prereqs)
            })
            .collect();
        let lookup: HashMap<&str, &MetadataRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();
        let module = bench_group(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_cycle_pairs", size), &module, |b, m| {
            b.iter(|| black_box(order_module(m.clone(), &lookup, &graph, &config)))
        });
    }

    group.finish();
}

// ============================================================================
// CR-02: Grouping benchmarks
// ============================================================================

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("cr-02-grouping");
    group.measurement_time(Duration::from_secs(10));

    let item_counts = [1000, 10000];
    for count in item_counts {
        let items: Vec<AggregatedItem> = (0..count)
            .map(|i| AggregatedItem {
                index: i as u64,
                module_id: Some(format!("module-{}", i % 20)),
                id: Some(format!("n{i}")),
                complexity: None,
                extra: serde_json::Map::new(),
            })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("group_by_module_20_modules", count),
            &items,
            |b, input| b.iter(|| black_box(group_by_module(input.clone()))),
        );
    }

    group.finish();
}

// ============================================================================
// CR-01: Pool projection benchmarks
// ============================================================================

fn bench_pool_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cr-01-pool-projection");
    group.measurement_time(Duration::from_secs(10));

    fn make_pool(item_count: usize) -> Vec<PoolContainer> {
        let mut rng = rand::thread_rng();
        let per_container = 50;
        (0..item_count.div_ceil(per_container))
            .map(|container| {
                let base = container * per_container;
                PoolContainer {
                    id: Some(format!("container-{container}")),
                    content: ContainerContent {
                        theory: (0..per_container / 2)
                            .map(|i| TheoryItem {
                                id: Some(format!("t{}", base + i)),
                                complexity: Some(rng.gen_range(1..=10)),
                                interview_relevance: Some(rng.gen_range(1..=10)),
                                tags: vec!["bench".to_string()],
                                irrelevant: rng.gen_bool(0.1),
                                ..Default::default()
                            })
                            .collect(),
                        questions: (0..per_container / 2)
                            .map(|i| QuestionItem {
                                id: Some(format!("q{}", base + i)),
                                complexity: Some(rng.gen_range(1..=10)),
                                interview_frequency: Some(rng.gen_range(1..=10)),
                                ..Default::default()
                            })
                            .collect(),
                        tasks: vec![],
                    },
                }
            })
            .collect()
    }

    let pool_sizes = [100, 1000, 5000];
    for size in pool_sizes {
        let pool = make_pool(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("project_pool", size),
            &pool,
            |b, p| b.iter(|| black_box(project_pool(p))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_module_ordering,
    bench_grouping,
    bench_pool_projection,
);

criterion_main!(benches);
