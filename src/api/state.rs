//! Application state for the Credit Pre-evaluation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyConfig;

/// Shared application state.
///
/// Holds the active lending policy. The policy is immutable after startup,
/// so handlers share it behind an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyConfig>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the active policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_same_policy() {
        let state = AppState::new(PolicyConfig::default());
        let clone = state.clone();
        assert_eq!(state.policy().max_term, clone.policy().max_term);
    }
}
