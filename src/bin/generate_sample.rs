//! Writes a synthetic recipe catalog in `complexSearch` response shape.
//!
//! Usage: `generate_sample [OUTPUT] [COUNT]` (defaults: sample_recipes.json, 40)

use anyhow::{Context, Result};
use serde_json::{Value, json};

const DEFAULT_OUTPUT: &str = "sample_recipes.json";
const DEFAULT_COUNT: usize = 40;

const DISHES: [(&str, &[&str]); 12] = [
    ("Pasta Bake", &["Italian", "European"]),
    ("Risotto", &["Italian"]),
    ("Beef Tacos", &["Mexican"]),
    ("Chicken Enchiladas", &["Mexican"]),
    ("Pad Thai", &["Thai", "Asian"]),
    ("Green Curry", &["Thai", "Asian"]),
    ("Chana Masala", &["Indian", "Asian"]),
    ("Ramen", &["Japanese", "Asian"]),
    ("Ratatouille", &["French", "Mediterranean", "European"]),
    ("Greek Salad", &["Mediterranean", "Greek"]),
    ("Cheeseburger", &["American"]),
    ("Overnight Oats", &[]),
];

const ADJECTIVES: [&str; 6] = ["Easy", "Spicy", "Classic", "Quick", "Hearty", "Weeknight"];

const DIETS: [&str; 6] = [
    "gluten free",
    "dairy free",
    "lacto ovo vegetarian",
    "vegan",
    "paleolithic",
    "primal",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

fn recipe(rng: &mut SimpleRng, id: u64) -> Value {
    let (dish, cuisines) = *rng.pick(&DISHES);
    let title = format!("{} {dish}", rng.pick(&ADJECTIVES));

    let diets: Vec<&str> = DIETS.iter().copied().filter(|_| rng.chance(25)).collect();
    let vegetarian = diets.iter().any(|d| d.contains("vegetarian") || *d == "vegan");

    let mut rec = json!({
        "id": id,
        "title": title,
        "image": format!("https://img.example.com/recipes/{id}-556x370.jpg"),
        "cuisines": cuisines,
        "diets": diets,
        "servings": 1 + rng.below(8),
        "healthScore": rng.below(100),
        "vegetarian": vegetarian,
        "vegan": diets.contains(&"vegan"),
        "glutenFree": diets.contains(&"gluten free"),
        "dairyFree": diets.contains(&"dairy free"),
        "sourceUrl": format!("https://recipes.example.com/{id}"),
        "summary": format!("<b>{title}</b> is a <i>{}</i> favourite.", cuisines.first().unwrap_or(&"home-style")),
        "instructions": "<ol><li>Prepare the ingredients.</li><li>Cook until done.</li></ol>",
        "extendedIngredients": [
            {"original": "2 cups water", "name": "water", "amount": 2.0, "unit": "cups"},
            {"original": "1 tsp salt", "name": "salt", "amount": 1.0, "unit": "tsp"}
        ]
    });

    // Some providers omit the cooking time entirely.
    if !rng.chance(10) {
        rec["readyInMinutes"] = json!(5 + rng.below(90));
    }
    rec
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let count = match args.next() {
        Some(n) => n.parse::<usize>().context("COUNT must be a number")?,
        None => DEFAULT_COUNT,
    };

    let mut rng = SimpleRng::new(42);
    let results: Vec<Value> = (0..count as u64)
        .map(|i| recipe(&mut rng, 600_000 + i))
        .collect();

    let body = json!({
        "results": results,
        "offset": 0,
        "number": count,
        "totalResults": count,
    });

    let text = serde_json::to_string_pretty(&body).context("serializing catalog")?;
    std::fs::write(&output_path, text)
        .with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {count} recipes to {output_path}");
    Ok(())
}
