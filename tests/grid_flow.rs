//! End-to-end editor flows against the in-memory store: navigation,
//! grid loading, reference seeding, parent resolution, and persistence.

use std::sync::Arc;

use simrenda::adapters::memory::InMemoryPlanningStore;
use simrenda::adapters::notify::RecordingNotifier;
use simrenda::application::{PlanningService, Workspace};
use simrenda::domain::hierarchy::{DatasetKind, HierarchyLevel};
use simrenda::domain::planning::{PlanYear, RecordDraft};
use simrenda::ports::Severity;

struct App {
    store: Arc<InMemoryPlanningStore>,
    service: Arc<PlanningService>,
    notifier: Arc<RecordingNotifier>,
    workspace: Workspace,
}

fn app() -> App {
    let store = Arc::new(InMemoryPlanningStore::new());
    let service = Arc::new(PlanningService::new(store.clone()));
    let notifier = Arc::new(RecordingNotifier::new());
    let workspace = Workspace::new(service.clone(), notifier.clone());
    App {
        store,
        service,
        notifier,
        workspace,
    }
}

fn draft(code: &str, name: &str) -> RecordDraft {
    RecordDraft {
        code: code.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn renstra_program_entry_seeded_from_kepmen() {
    let mut app = app();

    // reference catalog and an already-persisted parent urusan
    app.service
        .create(
            DatasetKind::Reference,
            HierarchyLevel::Program,
            RecordDraft {
                code: "010203".to_string(),
                name: "Program Pengelolaan Sumber Daya Air".to_string(),
                sasaran: vec!["Meningkatnya layanan air".to_string()],
                indikator: vec!["Persentase layanan".to_string()],
                satuan: Some("persen".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let urusan = app
        .service
        .create(
            DatasetKind::StrategicPlan,
            HierarchyLevel::Urusan,
            draft("0102", "Pekerjaan Umum"),
        )
        .await
        .unwrap();

    // navigate to the Renstra editor and switch to the program level
    assert!(app.workspace.navigate("/renstra").await);
    let grid = app.workspace.grid_mut().unwrap();
    grid.change_level(HierarchyLevel::Program).await;
    assert!(grid.rows().is_empty());

    // open the create form and pick the reference row
    grid.open_create().await;
    let reference_id = {
        let form = grid.form().unwrap();
        assert_eq!(form.reference_options().len(), 1);
        form.reference_options()[0].id
    };
    {
        let form = grid.form_mut().unwrap();
        form.select_reference(&reference_id).await;
        // parent urusan derived from the code prefix "0102"
        assert_eq!(form.draft().parent_id(), Some(urusan.id));

        let plan = form.draft_mut().plan_mut().unwrap();
        plan.years[0] = PlanYear {
            target: "80".to_string(),
            anggaran: 1_500_000_000,
        };
    }

    grid.submit_form().await;

    // form closed, grid reloaded with the persisted row
    assert!(grid.form().is_none());
    assert_eq!(grid.rows().len(), 1);
    let row = &grid.rows()[0];
    assert_eq!(row.code, "010203");
    assert_eq!(row.name, "Program Pengelolaan Sumber Daya Air");
    assert_eq!(row.sasaran, vec!["Meningkatnya layanan air".to_string()]);
    assert_eq!(row.parent_id, Some(urusan.id));
    let plan = row.plan.as_ref().unwrap();
    assert_eq!(plan.years[0].target, "80");
    assert_eq!(plan.years[0].anggaran, 1_500_000_000);

    let toast = app.notifier.last().unwrap();
    assert_eq!(toast.severity, Severity::Default);
    assert_eq!(toast.description, "Item created successfully");
}

#[tokio::test]
async fn master_data_edit_and_dashboard_counts() {
    let mut app = app();

    assert!(app.workspace.navigate("/master-data").await);
    let grid = app.workspace.grid_mut().unwrap();

    // create a top-level urusan (no reference selector in this variant)
    grid.open_create().await;
    {
        let form = grid.form_mut().unwrap();
        assert!(form.reference_options().is_empty());
        form.draft_mut().set_code("01");
        form.draft_mut().set_name("Urusan Pemerintahan Wajib");
    }
    grid.submit_form().await;
    assert_eq!(grid.rows().len(), 1);
    let id = grid.rows()[0].id;

    // edit it through the selection-gated dialog
    grid.toggle_select(id);
    assert!(grid.open_edit().await);
    grid.form_mut()
        .unwrap()
        .draft_mut()
        .set_name("Urusan Pemerintahan Wajib Dasar");
    grid.submit_form().await;
    assert_eq!(grid.rows()[0].name, "Urusan Pemerintahan Wajib Dasar");

    let counts = app.workspace.dashboard().await.unwrap();
    assert_eq!(counts.urusan, 1);
    assert_eq!(counts.total(), 1);
}

#[tokio::test]
async fn search_then_bulk_delete_with_one_missing_row() {
    let mut app = app();
    for (code, name) in [("01", "Alpha"), ("02", "Beta"), ("10", "Gamma")] {
        app.service
            .create(DatasetKind::Master, HierarchyLevel::Urusan, draft(code, name))
            .await
            .unwrap();
    }

    app.workspace.navigate("/master-data").await;
    let grid = app.workspace.grid_mut().unwrap();

    // substring search over code and name
    grid.set_search("1");
    let codes: Vec<_> = grid.visible_rows().iter().map(|r| r.code.clone()).collect();
    assert_eq!(codes, vec!["01", "10"]);
    grid.set_search("");

    // select everything, then one row vanishes out from under the batch
    let ids: Vec<_> = grid.rows().iter().map(|r| r.id).collect();
    for id in &ids {
        grid.toggle_select(*id);
    }
    app.service
        .delete(DatasetKind::Master, HierarchyLevel::Urusan, &ids[1])
        .await
        .unwrap();

    grid.delete_selected().await;

    // one aggregate failure toast; the surviving rows were still removed
    let toasts = app.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Destructive);
    assert_eq!(toasts[0].description, "Failed to delete items");
    assert!(grid.rows().is_empty());

    // confirm against the store itself, not just the grid cache
    use simrenda::domain::hierarchy::field_set;
    use simrenda::ports::PlanningStore;
    let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
    assert!(app.store.fetch_all(&fields).await.unwrap().is_empty());
}
