//! RepairProfileHandler - reconciles the profile against its history.
//!
//! The history log is the source of truth for earned score. If the
//! stored profile total drifts from the sum of entries (a crash between
//! writes on a non-atomic store, or hand-edited files), this pass
//! rebuilds the profile from the log and saves it back.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileStore;

/// Outcome of a repair pass.
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// Profile as it stands after the pass.
    pub profile: UserProfile,
    /// True if a drift was found and the profile was rewritten.
    pub repaired: bool,
    /// Stored total before the pass.
    pub stored_total: f64,
    /// Sum of history entry scores.
    pub history_total: f64,
}

/// Handler that rebuilds the profile from the score history.
pub struct RepairProfileHandler {
    profile_store: Arc<dyn ProfileStore>,
}

impl RepairProfileHandler {
    pub fn new(profile_store: Arc<dyn ProfileStore>) -> Self {
        Self { profile_store }
    }

    pub async fn handle(&self) -> Result<RepairReport, DomainError> {
        let mut profile = self.profile_store.load_profile().await?;
        let history = self.profile_store.score_history().await?;

        let stored_total = profile.total_score();
        let history_total: f64 = history.iter().map(|entry| entry.score()).sum();

        // Float sums of the same entries can differ in the last bits
        // depending on accumulation order, so compare with a tolerance.
        if (stored_total - history_total).abs() <= 1e-9 {
            debug!(total = stored_total, "profile consistent with history");
            return Ok(RepairReport {
                profile,
                repaired: false,
                stored_total,
                history_total,
            });
        }

        warn!(
            stored = stored_total,
            from_history = history_total,
            "profile total drifted from history, rebuilding"
        );
        profile.rebuild_from_total(history_total)?;
        self.profile_store.save_profile(&profile).await?;

        Ok(RepairReport {
            profile,
            repaired: true,
            stored_total,
            history_total,
        })
    }
}
