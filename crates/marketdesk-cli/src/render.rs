//! Plain-text rendering of catalogs, profiles and the selection matrix.

use marketdesk_core::PermissionCatalog;
use marketdesk_models::{AdminAccount, PermissionProfile};
use marketdesk_store::CategoryRow;
use std::fmt::Write as _;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

fn mark(checked: bool) -> &'static str {
    if checked { CHECKED } else { UNCHECKED }
}

pub fn render_catalog(catalog: &PermissionCatalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{}", category.name);
        for label in &category.labels {
            let _ = writeln!(out, "  - {}", label);
        }
    }
    out
}

/// One line per profile: `#id  name  (kind)  N categories`.
pub fn render_profile_line(profile: &PermissionProfile) -> String {
    let categories = profile.selections.iter().count();
    format!(
        "#{:<4} {:<32} ({}) {} categor{}",
        profile.id,
        profile.name,
        profile.kind,
        categories,
        if categories == 1 { "y" } else { "ies" }
    )
}

/// The selection matrix: one block per category, the header checkbox
/// reflecting the whole-category state.
pub fn render_matrix(rows: &[CategoryRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{} {}", mark(row.fully_selected), row.category);
        for cell in &row.labels {
            let _ = writeln!(out, "    {} {}", mark(cell.checked), cell.label);
        }
    }
    out
}

pub fn render_profile(profile: &PermissionProfile, rows: &[CategoryRow]) -> String {
    format!(
        "{}\nUpdated: {}\n\n{}",
        render_profile_line(profile),
        profile.updated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        render_matrix(rows)
    )
}

pub fn render_admin(account: &AdminAccount) -> String {
    format!(
        "Name:  {}\nEmail: {}\nPhone: {}\nRole:  {}",
        account.name,
        account.email,
        account.phone.as_deref().unwrap_or("-"),
        account.role
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdesk_core::{ALL, Selections};
    use marketdesk_store::editor::render_rows;

    #[test]
    fn test_matrix_marks_selected_labels() {
        let catalog = PermissionCatalog::marketplace();
        let selections =
            Selections::new().with_category("Finance", vec!["Payouts".to_string()]);

        let text = render_matrix(&render_rows(&catalog, &selections));

        assert!(text.contains("[ ] Finance\n"));
        assert!(text.contains("    [x] Payouts\n"));
        assert!(text.contains("    [ ] Tax Settings\n"));
    }

    #[test]
    fn test_matrix_full_category_header() {
        let catalog = PermissionCatalog::marketplace();
        let finance = catalog.category("Finance").unwrap();
        let selections = Selections::new().with_category("Finance", finance.labels.clone());

        let text = render_matrix(&render_rows(&catalog, &selections));

        assert!(text.contains("[x] Finance\n"));
        assert!(text.contains(&format!("    [x] {}\n", ALL)));
    }

    #[test]
    fn test_catalog_lists_every_label() {
        let catalog = PermissionCatalog::marketplace();
        let text = render_catalog(&catalog);
        for category in catalog.categories() {
            assert!(text.contains(&category.name));
            for label in &category.labels {
                assert!(text.contains(&format!("  - {}", label)));
            }
        }
    }
}
