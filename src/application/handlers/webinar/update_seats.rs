//! UpdateSeatsHandler - Command handler for raising webinar capacity.

use std::sync::Arc;

use crate::domain::foundation::{UserId, WebinarId};
use crate::domain::webinar::WebinarError;
use crate::ports::WebinarRepository;

use super::SchedulingPolicy;

/// Command to change a webinar's seat capacity.
#[derive(Debug, Clone)]
pub struct UpdateSeatsCommand {
    pub webinar_id: WebinarId,
    pub user_id: UserId,
    pub seats: i32,
}

/// Result of a successful seat update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSeatsResult {
    pub webinar_id: WebinarId,
    pub seats: i32,
}

/// Handler for updating seats.
pub struct UpdateSeatsHandler {
    repository: Arc<dyn WebinarRepository>,
    policy: SchedulingPolicy,
}

impl UpdateSeatsHandler {
    pub fn new(repository: Arc<dyn WebinarRepository>) -> Self {
        Self {
            repository,
            policy: SchedulingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn handle(&self, cmd: UpdateSeatsCommand) -> Result<UpdateSeatsResult, WebinarError> {
        // 1. Load webinar
        let mut webinar = self
            .repository
            .find_by_id(&cmd.webinar_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(webinar_id = %cmd.webinar_id, "update_seats: webinar not found");
                WebinarError::not_found(cmd.webinar_id.clone())
            })?;

        // 2. Authorize - caller must be the organizer
        if !webinar.is_organizer(&cmd.user_id) {
            tracing::warn!(
                webinar_id = %cmd.webinar_id,
                user_id = %cmd.user_id,
                "update_seats: caller is not the organizer"
            );
            return Err(WebinarError::NotOrganizer);
        }

        // 3. Apply change
        self.policy.check_seats(cmd.seats)?;
        webinar.update_seats(cmd.seats)?;

        // 4. Persist
        self.repository.update(&webinar).await.map_err(|e| {
            tracing::error!(webinar_id = %cmd.webinar_id, error = %e, "update_seats: persistence failed");
            e
        })?;

        tracing::info!(webinar_id = %cmd.webinar_id, seats = webinar.seats(), "seats updated");

        Ok(UpdateSeatsResult {
            webinar_id: cmd.webinar_id,
            seats: webinar.seats(),
        })
    }
}
