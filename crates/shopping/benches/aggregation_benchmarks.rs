use campkit_shopping::{
    format_for_export, group_by_category, merge_ingredients, parse_meal_text, MealIngredient,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build a meal's worth of ingredients for benchmarking.
fn create_bench_meal(meal: usize, ingredients: usize) -> Vec<MealIngredient> {
    let names = [
        "Chicken", "Rice", "Beans", "Cheese", "Salsa", "Bacon", "Pancakes", "Syrup", "Apples",
        "Coffee",
    ];
    (0..ingredients)
        .map(|at| {
            let name = names[at % names.len()];
            parse_meal_text(name, &format!("meal {meal}"))
                .into_iter()
                .next()
                .unwrap_or(MealIngredient {
                    item: name.to_string(),
                    quantity: 1.0,
                    unit: "serving".to_string(),
                    category: Default::default(),
                    source: format!("meal {meal}"),
                    optional: false,
                })
        })
        .collect()
}

fn bench_merge_ingredients(c: &mut Criterion) {
    let meals: Vec<Vec<MealIngredient>> = (0..21).map(|meal| create_bench_meal(meal, 8)).collect();

    c.bench_function("merge 21 meals", |b| {
        b.iter(|| merge_ingredients(black_box(&meals)))
    });
}

fn bench_group_and_export(c: &mut Criterion) {
    let meals: Vec<Vec<MealIngredient>> = (0..21).map(|meal| create_bench_meal(meal, 8)).collect();
    let merged = merge_ingredients(&meals);

    c.bench_function("group by category", |b| {
        b.iter(|| group_by_category(black_box(&merged)))
    });
    c.bench_function("format grouped export", |b| {
        b.iter(|| format_for_export(black_box(&merged), true))
    });
}

fn bench_parse_meal_text(c: &mut Criterion) {
    c.bench_function("parse meal text", |b| {
        b.iter(|| {
            parse_meal_text(
                black_box("grilled chicken with rice and beans topped with cheese"),
                "dinner",
            )
        })
    });
}

criterion_group!(
    benches,
    bench_merge_ingredients,
    bench_group_and_export,
    bench_parse_meal_text
);
criterion_main!(benches);
