//! Shared service context for the running app.

use crate::services::auth::AuthService;
use crate::services::availability::AvailabilityBoard;
use crate::services::catalog::Catalog;
use crate::services::directory::Directory;
use crate::services::feedback::FeedbackDesk;
use crate::services::resources::ResourceShelf;
use crate::services::sessions::SessionBook;

/// Every in-memory repository the portals read and mutate. Built once at
/// startup from the seeded demo data and owned by the app for its whole
/// lifetime.
pub struct AppContext {
    pub auth: AuthService,
    pub availability: AvailabilityBoard,
    pub sessions: SessionBook,
    pub directory: Directory,
    pub catalog: Catalog,
    pub resources: ResourceShelf,
    pub feedback: FeedbackDesk,
}

impl AppContext {
    pub fn seeded() -> Self {
        Self {
            auth: AuthService::new(),
            availability: AvailabilityBoard::seeded(),
            sessions: SessionBook::seeded(),
            directory: Directory::seeded(),
            catalog: Catalog::seeded(),
            resources: ResourceShelf::seeded(),
            feedback: FeedbackDesk::seeded(),
        }
    }
}
