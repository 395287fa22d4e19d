use clipgroup_core::{AnimationGroup, AnimationGroupList, MemoryStore, TimeContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_list(groups: usize, nodes_per_group: u32) -> AnimationGroupList {
    let mut list = AnimationGroupList::new(TimeContext::default());
    for i in 0..groups {
        let group = list.create_group();
        group.set_name(format!("Clip_{i}"));
        let refs: Vec<u32> = (0..nodes_per_group).collect();
        group.set_node_refs(&refs);
    }
    list
}

fn bench_group_codec(c: &mut Criterion) {
    c.bench_function("save_64_groups_512_nodes", |b| {
        b.iter_batched(
            || (build_list(64, 512), MemoryStore::new()),
            |(mut list, mut store)| {
                list.save_to_data(&mut store).unwrap();
                black_box(store.len())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let mut store = MemoryStore::new();
    build_list(64, 512).save_to_data(&mut store).unwrap();
    c.bench_function("load_64_groups_512_nodes", |b| {
        b.iter(|| {
            let mut list = AnimationGroupList::new(TimeContext::default());
            list.load_from_data(black_box(&store)).unwrap();
            black_box(list.len())
        })
    });

    c.bench_function("noop_setters_clean_group", |b| {
        let mut store = MemoryStore::new();
        let mut group = AnimationGroup::new(TimeContext::default());
        let refs: Vec<u32> = (0..512).collect();
        group.set_node_refs(&refs);
        group.save_to_data(&mut store).unwrap();
        b.iter(|| {
            group.set_node_refs(black_box(&refs));
            group.set_frame_range(0, 100);
            black_box(group.is_dirty())
        })
    });
}

criterion_group!(benches, bench_group_codec);
criterion_main!(benches);
