//! Benchmarks for profile learning and peer matching
//!
//! Run with: cargo bench --package taste

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use taste::{PreferenceLearner, SimilarityMatcher};
use wardrobe_store::{CondensedPeerPrefs, InMemoryStore, WardrobeItem};

fn build_wardrobe(size: u32) -> Vec<WardrobeItem> {
    let colors = ["black", "blue", "white", "olive", "red"];
    let brands = ["Zara", "Uniqlo", "Levi's", "Nike"];
    let categories = ["Tops", "Pants", "Shoes", "Jackets"];

    (0..size)
        .map(|i| WardrobeItem {
            id: i,
            owner: 1,
            category: categories[i as usize % categories.len()].to_string(),
            color: Some(colors[i as usize % colors.len()].to_string()),
            brand: Some(brands[i as usize % brands.len()].to_string()),
            is_favorite: i % 7 == 0,
            wear_count: i % 11,
            last_worn: None,
            season: None,
            available: true,
        })
        .collect()
}

fn build_pool(size: u32) -> Vec<CondensedPeerPrefs> {
    let tags = ["casual", "formal", "boho", "street", "minimal"];
    let colors = ["black", "blue", "white", "olive", "red"];

    (0..size)
        .map(|i| CondensedPeerPrefs {
            user_id: i + 2,
            style_tags: tags
                .iter()
                .skip(i as usize % tags.len())
                .take(2)
                .map(|t| t.to_string())
                .collect(),
            colors: colors
                .iter()
                .skip(i as usize % colors.len())
                .take(2)
                .map(|c| c.to_string())
                .collect(),
        })
        .collect()
}

fn bench_learn_profile(c: &mut Criterion) {
    let learner = PreferenceLearner::new();
    let wardrobe = build_wardrobe(200);

    c.bench_function("learn_profile_200_items", |b| {
        b.iter(|| {
            let profile = learner.learn(1, black_box(&wardrobe), None);
            black_box(profile)
        })
    });
}

fn bench_find_peers(c: &mut Criterion) {
    let learner = PreferenceLearner::new();
    let wardrobe = build_wardrobe(200);
    let mut profile = learner.learn(1, &wardrobe, None);
    profile.preferred_styles = ["casual", "boho", "minimal"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut store = InMemoryStore::new();
    for user_id in 2..102 {
        store.insert_peer_favorite(user_id, user_id * 10);
    }
    let matcher = SimilarityMatcher::new(Arc::new(store));
    let pool = build_pool(100);

    c.bench_function("find_peers_pool_100", |b| {
        b.iter(|| {
            let group = matcher.find_peers(black_box(&profile), black_box(&pool));
            black_box(group)
        })
    });
}

criterion_group!(benches, bench_learn_profile, bench_find_peers);
criterion_main!(benches);
