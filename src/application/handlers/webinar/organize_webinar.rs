//! OrganizeWebinarHandler - Command handler for creating webinars.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId, WebinarId};
use crate::domain::webinar::{Webinar, WebinarError, WebinarProps};
use crate::ports::{Clock, IdGenerator, WebinarRepository};

use super::SchedulingPolicy;

/// Command to organize a new webinar.
#[derive(Debug, Clone)]
pub struct OrganizeWebinarCommand {
    pub user_id: UserId,
    pub title: String,
    pub seats: i32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Result of successful webinar creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeWebinarResult {
    pub id: WebinarId,
}

/// Handler for organizing webinars.
pub struct OrganizeWebinarHandler {
    repository: Arc<dyn WebinarRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    policy: SchedulingPolicy,
}

impl OrganizeWebinarHandler {
    pub fn new(
        repository: Arc<dyn WebinarRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            clock,
            policy: SchedulingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn handle(
        &self,
        cmd: OrganizeWebinarCommand,
    ) -> Result<OrganizeWebinarResult, WebinarError> {
        // 1. Allocate identity
        let id = self.id_generator.generate();

        // 2. Deployment policy (the clock is only read when a notice period is set)
        if self.policy.minimum_notice.is_some() {
            let now = self.clock.now();
            self.policy.check_start(&cmd.start_date, &now)?;
        }
        self.policy.check_seats(cmd.seats)?;

        // 3. Build aggregate
        let webinar = Webinar::create(WebinarProps {
            id,
            organizer_id: cmd.user_id,
            title: cmd.title,
            seats: cmd.seats,
            start_date: cmd.start_date,
            end_date: cmd.end_date,
        })
        .map_err(|e| {
            tracing::warn!(error = %e, "organize_webinar: validation failed");
            e
        })?;

        // 4. Persist
        self.repository.create(&webinar).await.map_err(|e| {
            tracing::error!(webinar_id = %webinar.id(), error = %e, "organize_webinar: persistence failed");
            e
        })?;

        tracing::info!(
            webinar_id = %webinar.id(),
            organizer_id = %webinar.organizer_id(),
            seats = webinar.seats(),
            "webinar organized"
        );

        Ok(OrganizeWebinarResult {
            id: webinar.id().clone(),
        })
    }
}
