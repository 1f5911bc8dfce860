use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use wisen_application::editor::{SubmitOutcome, UPDATED_NOTICE};
use wisen_application::views::{self, ProjectDetailView};
use wisen_application::{Route, SessionFlagStore, Site};
use wisen_core::config::AppConfig;
use wisen_core::project::{ChartDatum, ProjectKind, ProjectPatch, ProjectStore};
use wisen_core::seed;
use wisen_core::storage::DurableStorage;
use wisen_infrastructure::{FileStorage, MemoryStorage};

const DELAY: Duration = Duration::from_millis(800);

#[test]
fn test_replayed_mutations_yield_implied_state() {
    let mut store = seed::seeded_project_store();
    let mut extra = seed::initial_projects()[0].clone();
    extra.id = "10".to_string();
    extra.title = "Extra".to_string();

    store.add(extra);
    store.update(
        "2",
        ProjectPatch {
            title: Some("Black Friday 2024".to_string()),
            ..Default::default()
        },
    );
    store.delete("3");
    store.toggle_visibility("1");
    store.delete("missing");

    let ids: Vec<&str> = store.all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["10", "1", "2"]);
    assert_eq!(store.get("2").unwrap().title, "Black Friday 2024");
    assert!(!store.get("1").unwrap().is_visible);
    assert!(store.get("10").unwrap().is_visible);
}

#[test]
fn test_toggle_twice_restores_original() {
    let mut store = seed::seeded_project_store();
    let before = store.all().to_vec();

    store.toggle_visibility("2");
    store.toggle_visibility("2");
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn test_listing_hides_one_of_three() {
    let mut store = ProjectStore::with_projects(seed::initial_projects());
    store.toggle_visibility("3");

    let listed: Vec<&str> = views::portfolio_listing(&store)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(listed, ["1", "2"]);
}

#[tokio::test(start_paused = true)]
async fn test_login_survives_restart_over_file_storage() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.toml");

    let storage: Arc<dyn DurableStorage> = Arc::new(FileStorage::new(path.clone()));
    let flags = SessionFlagStore::restore(storage, DELAY).await;
    assert!(!flags.login("", "x").await);
    assert!(!flags.is_authenticated());
    assert!(flags.login("a@b.com", "pw").await);

    let reopened: Arc<dyn DurableStorage> = Arc::new(FileStorage::new(path.clone()));
    let restored = SessionFlagStore::restore(reopened, DELAY).await;
    assert!(restored.is_authenticated());

    restored.logout().await;
    let again: Arc<dyn DurableStorage> = Arc::new(FileStorage::new(path));
    assert!(!SessionFlagStore::restore(again, DELAY).await.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn test_admin_gate_follows_session_flag() {
    let storage = MemoryStorage::new();
    let site = Site::start(AppConfig::default(), Arc::new(storage.clone()), None).await;
    assert_eq!(site.resolve(Route::Admin), Route::Login);
    assert_eq!(site.resolve(Route::Pricing), Route::Pricing);

    assert!(site.login("a@b.com", "pw").await);
    assert_eq!(site.resolve(Route::Admin), Route::Admin);

    let next_session = Site::start(AppConfig::default(), Arc::new(storage), None).await;
    assert_eq!(next_session.resolve(Route::Admin), Route::Admin);
}

#[tokio::test]
async fn test_edit_round_trip_without_changes_is_identity() {
    let mut site = Site::start(AppConfig::default(), Arc::new(MemoryStorage::new()), None).await;
    let originals = site.projects().all().to_vec();

    for original in &originals {
        site.begin_edit(&original.id).unwrap();
        let outcome = site.submit_project();
        assert_eq!(
            outcome,
            SubmitOutcome::Updated {
                id: original.id.clone()
            }
        );
        assert_eq!(site.projects().get(&original.id), Some(original));
    }
    assert_eq!(site.editor().notice(), Some(UPDATED_NOTICE));
}

#[tokio::test]
async fn test_analytical_submission_drops_empty_points_and_blocks() {
    let mut site = Site::start(AppConfig::default(), Arc::new(MemoryStorage::new()), None).await;
    let editor = site.editor_mut();
    editor.set_title("Funil");
    editor.set_category("Performance");
    editor.set_kind(ProjectKind::Analytical);

    editor.set_chart_title(0, "X");
    editor.set_data_point_name(0, 0, "A");
    editor.add_data_point(0);
    editor.set_data_point_value(0, 1, 5.0);
    editor.add_data_point(0);
    editor.set_data_point_name(0, 2, "B");
    editor.set_data_point_value(0, 2, 10.0);
    editor.add_chart_block();
    editor.set_chart_title(1, "Vazio");

    let SubmitOutcome::Created { id } = site.submit_project() else {
        panic!("expected a new project");
    };
    assert_eq!(site.projects().all()[0].id, id);

    let ProjectDetailView::Found(detail) = views::project_detail(site.projects(), &id) else {
        panic!("new project should be found");
    };
    assert_eq!(detail.charts.len(), 1);
    assert_eq!(detail.highlights, vec![ChartDatum::new("B", 10.0)]);
}

#[tokio::test]
async fn test_visual_submission_gets_generated_cover() {
    let mut site = Site::start(AppConfig::default(), Arc::new(MemoryStorage::new()), None).await;
    site.editor_mut().set_title("Sem imagem");

    let SubmitOutcome::Created { id } = site.submit_project() else {
        panic!("expected a new project");
    };
    let project = site.projects().get(&id).unwrap();
    assert!(!project.image_url.is_empty());
    assert!(project.active_gallery().is_empty());
}

#[tokio::test]
async fn test_generation_without_collaborator_uses_fallback() {
    let mut site = Site::start(AppConfig::default(), Arc::new(MemoryStorage::new()), None).await;
    assert!(site.generate_description().await.unwrap_err().is_validation());

    site.editor_mut().set_title("Campanha");
    site.editor_mut().set_category("Branding");
    site.generate_description().await.unwrap();
    assert_eq!(
        site.editor().form().description,
        wisen_application::description::GENERATION_FALLBACK
    );
}
