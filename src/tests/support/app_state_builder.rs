use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::domain::DemoPolicy;
use crate::modules::auth::application::ports::outgoing::AuthProvider;
use crate::modules::auth::application::services::AuthService;
use crate::modules::client_state::adapter::outgoing::CookiePolicy;
use crate::modules::client_state::application::services::PreferencesService;
use crate::modules::contact::application::ports::incoming::use_cases::ContactUseCase;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::application::services::{AdminContentService, PublicContentService};
use crate::modules::dashboard::application::services::DashboardService;
use crate::modules::remote_store::adapter::outgoing::{InMemoryRemoteStore, NullRemoteStore};
use crate::modules::remote_store::application::ports::outgoing::RemoteStore;
use crate::modules::remote_store::application::services::DataAccess;
use crate::modules::seed::application::domain::SampleContent;
use crate::modules::seed::application::services::SeedSync;
use crate::modules::visitor::application::domain::TrackerPolicy;
use crate::modules::visitor::application::services::VisitorTracker;
use crate::shared::clock::{Clock, SystemClock};
use crate::tests::support::auth_helper::{demo_signer, StaticTokenProvider};
use crate::AppState;

/// Builds an `AppState` over an in-memory store. Individual ports can be
/// swapped for stubs or mocks. Bearer `ADMIN_TOKEN` signs in as an admin and
/// `demo_cookie()` as the demo identity.
pub struct TestAppStateBuilder {
    store: Arc<dyn RemoteStore>,
    auth_provider: Arc<dyn AuthProvider>,
    demo: DemoPolicy,
    clock: Arc<dyn Clock>,
    tracker_policy: TrackerPolicy,
    contact: Option<Arc<dyn ContactUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryRemoteStore::new()),
            auth_provider: Arc::new(StaticTokenProvider),
            demo: DemoPolicy::default(),
            clock: Arc::new(SystemClock),
            tracker_policy: TrackerPolicy::default(),
            contact: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: InMemoryRemoteStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    pub fn with_null_store(mut self) -> Self {
        self.store = Arc::new(NullRemoteStore);
        self
    }

    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Arc::new(provider);
        self
    }

    pub fn with_contact(mut self, contact: impl ContactUseCase + Send + Sync + 'static) -> Self {
        self.contact = Some(Arc::new(contact));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let access = DataAccess::new(self.store);
        let contact = self
            .contact
            .unwrap_or_else(|| Arc::new(ContactService::new(access.clone())));

        web::Data::new(AppState {
            public_content: Arc::new(PublicContentService::new(access.clone())),
            admin_content: AdminContentService::new(access.clone()),
            contact,
            visitors: VisitorTracker::new(access.clone(), self.clock.clone(), self.tracker_policy),
            auth: AuthService::new(self.auth_provider, self.demo, Arc::new(demo_signer())),
            dashboard: DashboardService::new(access.clone(), self.clock),
            seed: SeedSync::new(access.clone(), SampleContent::default_portfolio()),
            preferences: PreferencesService::new(),
            cookie_policy: CookiePolicy::default(),
            store: access,
        })
    }
}
