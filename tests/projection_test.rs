use assert_float_eq::assert_float_absolute_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};

use pantry_planner_rs::models::{
    Increment, Ingredient, KbEntry, KnowledgeBank, Pantry, Recipe, StockEntry, Unit, far_future,
};
use pantry_planner_rs::planner::{generate_shopping_list, prune_pantry};

fn make_recipe(name: &str, ingredients: Vec<Ingredient>) -> Recipe {
    Recipe {
        name: name.to_string(),
        cooking_time: 25,
        total_calories: 520,
        grams_carbs: 42.0,
        grams_fat: 16.0,
        grams_protein: 31.0,
        ingredients,
    }
}

fn standard(name: &str, quantity: f64) -> Ingredient {
    Ingredient::new(name, quantity, Unit::Standard)
}

fn kb_entry(shelf_life: u32, quantity: f64, unit: &str) -> KbEntry {
    KbEntry {
        shelf_life,
        increment: Increment {
            quantity,
            unit: unit.to_string(),
        },
    }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_fresh_kitchen_buys_one_increment_per_ingredient() {
    let names = ["shrimp", "rice", "chicken", "beans", "pasta", "salmon"];
    let recipes: Vec<Recipe> = names
        .iter()
        .map(|name| make_recipe(name, vec![standard(name, 1.0)]))
        .collect();
    let selected: Vec<&Recipe> = recipes.iter().collect();

    let bank: KnowledgeBank = names
        .iter()
        .map(|name| (name.to_string(), kb_entry(2, 1.0, "unit")))
        .collect();

    let (list, projected) =
        generate_shopping_list(&selected, &Pantry::new(), &bank, fixed_now()).unwrap();

    assert_eq!(list.len(), 6, "every ingredient needs a purchase");
    for name in names {
        assert_eq!(list[name].count, 1, "one increment should cover '{}'", name);
    }

    // Each purchase is consumed exactly; the leftovers all sit at zero.
    assert_eq!(projected.len(), 6);
    for name in names {
        let entry = projected.get(name).unwrap();
        assert_float_absolute_eq!(entry.quantity, 0.0, 1e-9);
        assert_eq!(entry.expiry_date, fixed_now() + Duration::days(14));
    }

    assert!(prune_pantry(&projected).is_empty());
}

#[test]
fn test_stocked_pantry_nets_demand_and_keeps_expiries() {
    let recipes = vec![
        make_recipe("rice bowl", vec![standard("rice", 3.0), standard("tomato", 2.0)]),
    ];
    let selected: Vec<&Recipe> = recipes.iter().collect();

    let rice_expiry = fixed_now() + Duration::days(2);
    let tomato_expiry = fixed_now() + Duration::days(5);
    let lentil_expiry = fixed_now() + Duration::days(40);

    let mut pantry = Pantry::new();
    pantry.insert("rice", StockEntry::new(1.0, rice_expiry));
    pantry.insert("tomato", StockEntry::new(5.0, tomato_expiry));
    pantry.insert("lentils", StockEntry::new(3.0, lentil_expiry));

    let bank = KnowledgeBank::from([
        ("rice".to_string(), kb_entry(4, 2.0, "lb")),
        ("tomato".to_string(), kb_entry(1, 1.0, "unit")),
    ]);

    let (list, projected) =
        generate_shopping_list(&selected, &pantry, &bank, fixed_now()).unwrap();

    // Only rice runs short: 2 std missing is 0.5 lb, so one 2 lb bag.
    assert_eq!(list.len(), 1);
    assert_eq!(list["rice"].count, 1);
    assert_eq!(list["rice"].increment.unit, "lb");

    // The restock replaces the old rice balance and its expiry.
    let rice = projected.get("rice").unwrap();
    assert_float_absolute_eq!(rice.quantity, 6.0, 1e-9);
    assert_eq!(rice.expiry_date, fixed_now() + Duration::days(28));

    // Tomatoes were covered from stock; the surplus keeps its date.
    let tomato = projected.get("tomato").unwrap();
    assert_float_absolute_eq!(tomato.quantity, 3.0, 1e-9);
    assert_eq!(tomato.expiry_date, tomato_expiry);

    // Undemanded stock passes through untouched.
    let lentils = projected.get("lentils").unwrap();
    assert_float_absolute_eq!(lentils.quantity, 3.0, 1e-9);
    assert_eq!(lentils.expiry_date, lentil_expiry);
}

#[test]
fn test_discretization_covers_demand_with_whole_packs() {
    // (demand in std units, increment, expected count, expected leftover std)
    let cases = [
        (3.5, 6.0, "oz", 3, 1.0),
        (3.0, 6.0, "oz", 2, 0.0),
        (0.5, 2.0, "lb", 1, 7.5),
        (2.5, 1.0, "unit", 3, 0.5),
    ];

    for (demand, inc_quantity, inc_unit, expected_count, expected_leftover) in cases {
        let recipes = vec![make_recipe("dish", vec![standard("chicken", demand)])];
        let selected: Vec<&Recipe> = recipes.iter().collect();
        let bank =
            KnowledgeBank::from([("chicken".to_string(), kb_entry(2, inc_quantity, inc_unit))]);

        let (list, projected) =
            generate_shopping_list(&selected, &Pantry::new(), &bank, fixed_now()).unwrap();

        assert_eq!(
            list["chicken"].count, expected_count,
            "count for demand {} at {} {}",
            demand, inc_quantity, inc_unit
        );
        assert_float_absolute_eq!(
            projected.get("chicken").unwrap().quantity,
            expected_leftover,
            1e-9
        );
    }
}

#[test]
fn test_shopping_list_is_order_independent() {
    let a = make_recipe("a", vec![standard("carrot", 1.5), standard("rice", 2.0)]);
    let b = make_recipe("b", vec![standard("carrot", 2.5)]);
    let c = make_recipe("c", vec![standard("rice", 1.0), standard("carrot", 1.0)]);

    let bank = KnowledgeBank::from([
        ("carrot".to_string(), kb_entry(2, 1.0, "lb")),
        ("rice".to_string(), kb_entry(52, 2.0, "lb")),
    ]);

    let (list_fwd, projected_fwd) =
        generate_shopping_list(&[&a, &b, &c], &Pantry::new(), &bank, fixed_now()).unwrap();
    let (list_rev, projected_rev) =
        generate_shopping_list(&[&c, &b, &a], &Pantry::new(), &bank, fixed_now()).unwrap();

    assert_eq!(list_fwd["carrot"].count, list_rev["carrot"].count);
    assert_eq!(list_fwd["rice"].count, list_rev["rice"].count);
    assert_float_absolute_eq!(
        projected_fwd.total_quantity(),
        projected_rev.total_quantity(),
        1e-9
    );
}

#[test]
fn test_unknown_ingredient_aborts_projection() {
    let recipes = vec![make_recipe("paella", vec![standard("saffron", 0.5)])];
    let selected: Vec<&Recipe> = recipes.iter().collect();

    let err = generate_shopping_list(&selected, &Pantry::new(), &KnowledgeBank::new(), fixed_now())
        .unwrap_err();
    assert!(
        err.to_string().contains("saffron"),
        "error should name the missing ingredient: {}",
        err
    );
}

#[test]
fn test_prune_keeps_zero_entries_out_of_final_output() {
    let mut pantry = Pantry::new();
    pantry.insert("rice", StockEntry::new(0.0, far_future()));
    pantry.insert("beans", StockEntry::new(0.5, far_future()));
    pantry.insert("milk", StockEntry::new(0.0, fixed_now() + Duration::days(1)));

    let pruned = prune_pantry(&pantry);
    assert_eq!(pruned.len(), 1);
    assert!(pruned.contains("beans"));

    assert_eq!(prune_pantry(&pruned), pruned, "pruning twice changes nothing");
}
