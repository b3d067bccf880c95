//! Top-level navigation: which editor is mounted.
//!
//! The sidebar is an external collaborator; it hands over a route path
//! string, and the workspace decides which grid (if any) to mount for it.

use std::sync::Arc;

use crate::application::dashboard::DashboardCounts;
use crate::application::grid::GridSession;
use crate::application::service::PlanningService;
use crate::domain::foundation::DomainError;
use crate::domain::hierarchy::DatasetKind;
use crate::ports::Notifier;

/// The sidebar's top-level routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    MasterData,
    Renstra,
    Renja,
}

impl Route {
    /// Parses a sidebar path. Unknown paths are rejected.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/dashboard" => Some(Route::Dashboard),
            "/master-data" => Some(Route::MasterData),
            "/renstra" => Some(Route::Renstra),
            "/renja" => Some(Route::Renja),
            _ => None,
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::MasterData => "/master-data",
            Route::Renstra => "/renstra",
            Route::Renja => "/renja",
        }
    }
}

/// Mounted editors keyed by the active route.
pub struct Workspace {
    route: Route,
    grid: Option<GridSession>,
    service: Arc<PlanningService>,
    notifier: Arc<dyn Notifier>,
}

impl Workspace {
    /// Starts on the dashboard with nothing mounted.
    pub fn new(service: Arc<PlanningService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            route: Route::Dashboard,
            grid: None,
            service,
            notifier,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// The mounted grid, if the active route has one.
    pub fn grid(&self) -> Option<&GridSession> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut GridSession> {
        self.grid.as_mut()
    }

    /// Navigates to a sidebar path.
    ///
    /// Master-data mounts a Master grid, Renstra a StrategicPlan grid
    /// (freshly loaded at the urusan level); dashboard and renja mount
    /// nothing — renja exists in the navigation but has no editor yet.
    /// Unknown paths leave everything unchanged and return false.
    pub async fn navigate(&mut self, path: &str) -> bool {
        let Some(route) = Route::from_path(path) else {
            return false;
        };
        self.route = route;
        self.grid = match route {
            Route::MasterData => Some(self.mount_grid(DatasetKind::Master).await),
            Route::Renstra => Some(self.mount_grid(DatasetKind::StrategicPlan).await),
            Route::Dashboard | Route::Renja => None,
        };
        true
    }

    async fn mount_grid(&self, kind: DatasetKind) -> GridSession {
        let mut grid = GridSession::new(kind, self.service.clone(), self.notifier.clone());
        grid.refresh().await;
        grid
    }

    /// The dashboard overview counts.
    pub async fn dashboard(&self) -> Result<DashboardCounts, DomainError> {
        self.service.master_counts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlanningStore;
    use crate::adapters::notify::RecordingNotifier;
    use crate::domain::hierarchy::HierarchyLevel;
    use crate::domain::planning::RecordDraft;

    fn workspace() -> (Arc<PlanningService>, Workspace) {
        let store = Arc::new(InMemoryPlanningStore::new());
        let service = Arc::new(PlanningService::new(store));
        let notifier = Arc::new(RecordingNotifier::new());
        (service.clone(), Workspace::new(service, notifier))
    }

    #[test]
    fn route_parsing_covers_the_sidebar_paths() {
        assert_eq!(Route::from_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/master-data"), Some(Route::MasterData));
        assert_eq!(Route::from_path("/renstra"), Some(Route::Renstra));
        assert_eq!(Route::from_path("/renja"), Some(Route::Renja));
        assert_eq!(Route::from_path("/renstra/"), None);
        assert_eq!(Route::from_path("renstra"), None);
    }

    #[test]
    fn route_paths_round_trip() {
        for route in [Route::Dashboard, Route::MasterData, Route::Renstra, Route::Renja] {
            assert_eq!(Route::from_path(route.as_path()), Some(route));
        }
    }

    #[tokio::test]
    async fn master_data_route_mounts_a_loaded_master_grid() {
        let (service, mut workspace) = workspace();
        service
            .create(
                DatasetKind::Master,
                HierarchyLevel::Urusan,
                RecordDraft {
                    code: "01".to_string(),
                    name: "Urusan Wajib".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(workspace.navigate("/master-data").await);
        let grid = workspace.grid().unwrap();
        assert_eq!(grid.kind(), DatasetKind::Master);
        assert_eq!(grid.rows().len(), 1);
    }

    #[tokio::test]
    async fn renstra_route_mounts_a_strategic_plan_grid() {
        let (_, mut workspace) = workspace();
        assert!(workspace.navigate("/renstra").await);
        assert_eq!(workspace.grid().unwrap().kind(), DatasetKind::StrategicPlan);
    }

    #[tokio::test]
    async fn dashboard_and_renja_mount_no_grid() {
        let (_, mut workspace) = workspace();
        workspace.navigate("/renstra").await;
        assert!(workspace.grid().is_some());

        workspace.navigate("/dashboard").await;
        assert!(workspace.grid().is_none());

        workspace.navigate("/renja").await;
        assert!(workspace.grid().is_none());
    }

    #[tokio::test]
    async fn unknown_path_changes_nothing() {
        let (_, mut workspace) = workspace();
        workspace.navigate("/renstra").await;

        assert!(!workspace.navigate("/bogus").await);
        assert_eq!(workspace.route(), Route::Renstra);
        assert!(workspace.grid().is_some());
    }
}
