//! Selection rules checked against every category and label of the
//! built-in catalog.

use marketdesk::marketdesk_core::selection::{toggle_category, toggle_type};
use marketdesk::marketdesk_core::{ALL, PermissionCatalog, Selections};

fn starting_points(category: &str, labels: &[String]) -> Vec<Selections> {
    let concrete: Vec<String> = labels.iter().filter(|l| *l != ALL).cloned().collect();
    vec![
        Selections::new(),
        Selections::new().with_category(category, vec![ALL.to_string()]),
        Selections::new().with_category(category, concrete[..1].to_vec()),
        Selections::new().with_category(category, concrete.clone()),
        Selections::new().with_category(category, labels.to_vec()),
    ]
}

#[test]
fn test_toggling_all_twice_restores_empty_or_all_only() {
    let catalog = PermissionCatalog::marketplace();
    for category in catalog.categories() {
        for original in [
            Selections::new(),
            Selections::new().with_category(&category.name, vec![ALL.to_string()]),
        ] {
            let once = toggle_type(&original, &category.name, ALL);
            let twice = toggle_type(&once, &category.name, ALL);
            assert_eq!(twice, original, "category {}", category.name);
        }
    }
}

#[test]
fn test_concrete_toggle_never_leaves_all_selected() {
    let catalog = PermissionCatalog::marketplace();
    for category in catalog.categories() {
        for start in starting_points(&category.name, &category.labels) {
            for label in category.concrete_labels() {
                let next = toggle_type(&start, &category.name, label);
                assert!(!next.is_selected(&category.name, ALL));
            }
        }
    }
}

#[test]
fn test_all_toggle_yields_empty_or_all_only() {
    let catalog = PermissionCatalog::marketplace();
    for category in catalog.categories() {
        for start in starting_points(&category.name, &category.labels) {
            let next = toggle_type(&start, &category.name, ALL);
            let labels = next.get(&category.name);
            assert!(labels.is_empty() || labels == [ALL]);
            assert!(next.violates_exclusivity().is_empty());
        }
    }
}

#[test]
fn test_toggles_only_touch_their_category() {
    let catalog = PermissionCatalog::marketplace();
    let base = Selections::new()
        .with_category("Finance", vec!["Payouts".to_string()])
        .with_category("Analytics", vec![ALL.to_string()]);

    for category in catalog.categories() {
        let others = |s: &Selections| -> Vec<(String, Vec<String>)> {
            s.iter()
                .filter(|(name, _)| *name != category.name)
                .map(|(name, labels)| (name.to_string(), labels.to_vec()))
                .collect()
        };

        for label in &category.labels {
            assert_eq!(others(&toggle_type(&base, &category.name, label)), others(&base));
        }
        assert_eq!(others(&toggle_category(&base, category)), others(&base));
    }
}

#[test]
fn test_toggle_category_twice_from_empty_clears() {
    let catalog = PermissionCatalog::marketplace();
    for category in catalog.categories() {
        let full = toggle_category(&Selections::new(), category);
        assert_eq!(full.get(&category.name), category.labels.as_slice());
        assert!(full.is_category_fully_selected(category));

        let cleared = toggle_category(&full, category);
        assert!(cleared.is_empty());
    }
}
