//! Benchmarks for menu matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foodshare_search::{best_distance, search, FoodQuery, MenuEntry, WeightProfile};

struct Dish {
    food: String,
    restaurant: String,
}

impl MenuEntry for Dish {
    fn food_name(&self) -> &str {
        &self.food
    }

    fn restaurant_name(&self) -> &str {
        &self.restaurant
    }
}

fn create_menu(count: usize) -> Vec<Dish> {
    const FOODS: [&str; 6] = ["Pad Thai", "Green Curry", "Sushi Roll", "Margherita Pizza", "Ramen", "Falafel Wrap"];
    const RESTAURANTS: [&str; 4] = ["Thai Palace", "Tokyo Bar", "Luigi's", "Noodle House"];

    (0..count)
        .map(|i| Dish {
            food: format!("{} {}", FOODS[i % FOODS.len()], i),
            restaurant: RESTAURANTS[i % RESTAURANTS.len()].to_string(),
        })
        .collect()
}

fn bench_best_distance(c: &mut Criterion) {
    c.bench_function("best_distance_all_profiles", |b| {
        b.iter(|| best_distance(black_box("margarita piza"), black_box("Margherita Pizza"), &WeightProfile::ALL))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let query = FoodQuery::new(Some("pad tai"), Some("thai palace"), 2).unwrap();

    for size in [10, 100, 1000, 10000].iter() {
        let menu = create_menu(*size);
        group.bench_with_input(BenchmarkId::new("dual_field", size), size, |b, _| {
            b.iter(|| search(black_box(&query), black_box(&menu)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_best_distance, bench_search);
criterion_main!(benches);
