//! Property tests for the inventory invariants.

use proptest::prelude::*;

use stockroom_core::query::filter;
use stockroom_core::{
    Bound, FilterCriterion, Inventory, NameCollision, NullSink, Price, ProductDraft,
    Registration, SearchField,
};

fn inventory() -> Inventory {
    Inventory::with_sink(Box::new(NullSink))
}

prop_compose! {
    fn arb_draft()(
        name in "[a-c][a-z]{0,5}",
        company in prop::sample::select(vec!["Acme", "Globex", "Initech"]),
        category in prop::sample::select(vec!["Electronics", "Tools", "Food"]),
        sub in prop::sample::select(vec!["Peripheral", "Hand", "Grain"]),
        units in 0u64..2_000_000,
        stock in 0u64..200,
    ) -> ProductDraft {
        ProductDraft::new(&name, company, category, sub, Price::from_units(units), stock)
    }
}

fn arb_criterion() -> impl Strategy<Value = FilterCriterion> {
    let bound = prop_oneof![Just(Bound::Above), Just(Bound::Below)];
    prop_oneof![
        (bound.clone(), 0u64..2_000_000).prop_map(|(bound, units)| FilterCriterion::Price {
            bound,
            threshold: Price::from_units(units),
        }),
        (bound, 0u64..200).prop_map(|(bound, threshold)| FilterCriterion::Stock { bound, threshold }),
        prop::sample::select(vec!["Electronics", "Tools", "Food"]).prop_map(|value| {
            FilterCriterion::Field {
                field: SearchField::Category,
                value: value.to_string(),
            }
        }),
    ]
}

fn populated(drafts: Vec<ProductDraft>) -> Inventory {
    let mut inventory = inventory();
    for draft in drafts {
        inventory
            .register(draft, NameCollision::UseSameNameNewId)
            .unwrap();
    }
    inventory
}

proptest! {
    #[test]
    fn inserted_ids_are_unique_and_stored(drafts in prop::collection::vec(arb_draft(), 1..40)) {
        let mut inventory = inventory();
        let mut ids = Vec::new();
        for draft in drafts {
            if let Registration::Added(p) = inventory.register(draft, NameCollision::UseSameNameNewId).unwrap() {
                ids.push(p.id);
            }
        }

        for id in &ids {
            prop_assert!(inventory.store().contains_id(id));
        }
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn colliding_initials_still_get_distinct_ids(n in 1usize..60) {
        let mut inventory = inventory();
        for i in 0..n {
            // Every name starts with "W", so every ID shares the "WTH" suffix
            let draft = ProductDraft::new(&format!("W{i}"), "Acme", "Tools", "Hand", Price::zero(), 1);
            inventory.register(draft, NameCollision::UseSameNameNewId).unwrap();
        }
        let mut ids: Vec<_> = inventory.products().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids.len(), n);
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), n);
    }

    #[test]
    fn indexes_match_records(drafts in prop::collection::vec(arb_draft(), 0..30)) {
        let inventory = populated(drafts);
        for field in SearchField::ALL {
            for value in inventory.field_values(field) {
                let expected: Vec<_> = inventory
                    .products()
                    .iter()
                    .filter(|p| p.field(field) == value)
                    .map(|p| p.id.clone())
                    .collect();
                let indexed: Vec<_> = inventory.store().index().lookup(field, value).to_vec();
                prop_assert_eq!(indexed, expected);
            }
        }
    }

    #[test]
    fn filters_only_narrow(
        drafts in prop::collection::vec(arb_draft(), 0..30),
        a in arb_criterion(),
        b in arb_criterion(),
    ) {
        let inventory = populated(drafts);
        let first = filter(inventory.products(), &a);
        if let Some(narrowed) = first.products() {
            let second = filter(narrowed, &b);
            let second_products = second.products().unwrap_or(&[]);
            prop_assert!(second_products.len() <= narrowed.len());
            for p in second_products {
                prop_assert!(narrowed.contains(p));
            }
        }
    }

    #[test]
    fn averages_reconstruct_total_stock(drafts in prop::collection::vec(arb_draft(), 1..30)) {
        let inventory = populated(drafts);
        let summary = inventory.summarize().unwrap();

        let total: u64 = inventory.products().iter().map(|p| p.stock).sum();
        let rebuilt: f64 = summary
            .avg_stock_per_category
            .iter()
            .map(|(category, avg)| avg * *summary.by_category.get(category).unwrap() as f64)
            .sum();
        prop_assert!((rebuilt - total as f64).abs() < 1e-6);
    }
}
