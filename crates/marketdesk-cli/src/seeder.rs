//! Fake permission profiles for local development.
//!
//! Each profile gets a job-title name, a random kind and a handful of random
//! toggles run through the selection reducer, so seeded data always respects
//! the same rules as hand-made profiles.

use fake::faker::job::en::Title;
use fake::{Fake, Faker};
use marketdesk_core::{PermissionCatalog, SelectionEvent};
use marketdesk_models::{ProfileId, ProfileKind};
use marketdesk_store::{EditorError, ProfileEditor, ProfileRepository};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

const MAX_TOGGLES: usize = 8;

/// A random toggle on a random category of `catalog`.
pub fn random_event(catalog: &PermissionCatalog) -> Option<SelectionEvent> {
    let categories = catalog.categories();
    if categories.is_empty() {
        return None;
    }
    let category = &categories[(0..categories.len()).fake::<usize>()];

    // Whole-category toggles are rarer than single labels.
    if (0u8..5).fake::<u8>() == 0 || category.is_empty() {
        return Some(SelectionEvent::ToggleCategory {
            category: category.name.clone(),
        });
    }

    let label = &category.labels[(0..category.len()).fake::<usize>()];
    Some(SelectionEvent::ToggleType {
        category: category.name.clone(),
        label: label.clone(),
    })
}

/// An editor holding one fake, unsaved profile.
pub fn fake_profile(catalog: Arc<PermissionCatalog>) -> Result<ProfileEditor, EditorError> {
    let mut editor = ProfileEditor::new(catalog.clone());

    let title: String = Title().fake();
    editor.rename(title);
    editor.set_kind(if Faker.fake::<bool>() {
        ProfileKind::Edit
    } else {
        ProfileKind::View
    });

    for _ in 0..(1..=MAX_TOGGLES).fake::<usize>() {
        if let Some(event) = random_event(&catalog) {
            editor.apply(&event)?;
        }
    }

    Ok(editor)
}

/// Creates `count` fake profiles in `repo` and returns their ids.
pub async fn seed_profiles(
    repo: &dyn ProfileRepository,
    catalog: Arc<PermissionCatalog>,
    count: usize,
) -> Result<Vec<ProfileId>, EditorError> {
    let start = Instant::now();
    let mut ids = Vec::with_capacity(count);

    for _ in 0..count {
        let editor = fake_profile(catalog.clone())?;
        ids.push(editor.submit(repo).await?);
    }

    info!(
        count = ids.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Seeded permission profiles"
    );
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdesk_core::Selections;
    use marketdesk_store::InMemoryProfileRepository;

    #[test]
    fn test_fake_profile_respects_catalog() {
        let catalog = Arc::new(PermissionCatalog::marketplace());
        for _ in 0..25 {
            let editor = fake_profile(catalog.clone()).unwrap();
            assert!(!editor.draft().name.trim().is_empty());
            editor.selections().validate(&catalog).unwrap();
        }
    }

    #[test]
    fn test_random_events_resolve_against_catalog() {
        let catalog = PermissionCatalog::marketplace();
        for _ in 0..50 {
            let event = random_event(&catalog).unwrap();
            Selections::new().apply(&catalog, &event).unwrap();
        }
    }

    #[tokio::test]
    async fn test_seed_profiles_creates_count() {
        let repo = InMemoryProfileRepository::new();
        let catalog = Arc::new(PermissionCatalog::marketplace());

        let ids = seed_profiles(&repo, catalog, 5).await.unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(repo.len().await, 5);
    }
}
