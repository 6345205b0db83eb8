use std::sync::Arc;

use tracing::warn;

use crate::modules::contact::application::domain::{ContactColumn, ContactMessage};
use crate::modules::content::application::domain::entities::{
    Certificate, Experience, ExperienceColumn, Project, Skill,
};
use crate::modules::dashboard::application::domain::{years_of_experience, DashboardStats};
use crate::modules::remote_store::application::domain::{Caller, Query, Record};
use crate::modules::remote_store::application::services::DataAccess;
use crate::modules::visitor::application::domain::Visitor;
use crate::shared::clock::Clock;

/// Summary numbers for the admin dashboard. Each figure is computed on its
/// own; one failing query zeroes that figure only.
#[derive(Clone)]
pub struct DashboardService {
    access: DataAccess,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    pub fn new(access: DataAccess, clock: Arc<dyn Clock>) -> Self {
        Self { access, clock }
    }

    pub async fn stats(&self, caller: &Caller) -> DashboardStats {
        let access = self.access.for_caller(caller);
        let unread = Query::<ContactMessage>::new().eq(ContactColumn::Read, false);

        let (projects, certificates, skills, visitors, unread_messages, years) = futures::join!(
            count(&access, Query::<Project>::new()),
            count(&access, Query::<Certificate>::new()),
            count(&access, Query::<Skill>::new()),
            count(&access, Query::<Visitor>::new()),
            count(&access, unread),
            self.years_of_experience(&access),
        );

        DashboardStats {
            projects,
            certificates,
            skills,
            visitors,
            unread_messages,
            years_of_experience: years,
        }
    }

    async fn years_of_experience(&self, access: &DataAccess) -> u32 {
        let earliest = Query::<Experience>::new()
            .order_by(ExperienceColumn::StartDate, true)
            .limit(1);

        match access.select(&earliest).await {
            Ok(rows) => years_of_experience(
                rows.first().map(|e| e.start_date),
                self.clock.now().date_naive(),
            ),
            Err(e) => {
                warn!(error = %e, "Experience lookup failed, reporting 0 years");
                0
            }
        }
    }
}

async fn count<R: Record>(access: &DataAccess, query: Query<R>) -> u64 {
    access.count(&query).await.unwrap_or_else(|e| {
        warn!(table = R::TABLE, error = %e, "Count failed, reporting 0");
        0
    })
}
