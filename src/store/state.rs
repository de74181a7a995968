use std::sync::Arc;

use crate::model::{
    plan::Plan,
    user::{SubscribeInfo, UserInfo},
};

/// Observable state of the user-state store.
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    /// A refresh is outstanding
    pub loading: bool,
    /// Message of the last failed profile read, cleared when a refresh starts
    pub error: Option<String>,
    pub profile: Option<UserInfo>,
    /// Plan catalog, empty when it could not be read
    pub plans: Arc<Vec<Plan>>,
    /// Live usage, absent when it could not be read
    pub subscription: Option<SubscribeInfo>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            profile: None,
            plans: Arc::new(Vec::new()),
            subscription: None,
        }
    }
}

impl UserState {
    /// Profile merged with live usage.
    ///
    /// `u`, `d` and `subscribe_url` are taken from the usage read when present and fall back to
    /// the profile's own values otherwise.
    ///
    /// # Returns
    /// - `Some(AggregatedUserView)` - The profile is available, possibly degraded
    /// - `None` - The profile could not be obtained
    pub fn aggregated_view(&self) -> Option<AggregatedUserView> {
        let profile = self.profile.as_ref()?;
        let mut user = profile.clone();

        if let Some(usage) = &self.subscription {
            if let Some(u) = usage.u {
                user.u = u;
            }
            if let Some(d) = usage.d {
                user.d = d;
            }
            if let Some(url) = usage.subscribe_url.as_ref().filter(|url| !url.is_empty()) {
                user.subscribe_url = Some(url.clone());
            }
        }

        Some(AggregatedUserView {
            user,
            current_plan: self.current_plan().cloned(),
        })
    }

    /// Catalog entry matching the profile's selected plan.
    pub fn current_plan(&self) -> Option<&Plan> {
        let plan_id = self.profile.as_ref()?.plan_id?;
        self.plans.iter().find(|plan| plan.id == plan_id)
    }
}

/// Profile with usage fields overridden by the live usage read.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedUserView {
    pub user: UserInfo,
    pub current_plan: Option<Plan>,
}

impl AggregatedUserView {
    /// Uploaded plus downloaded bytes.
    pub fn used_traffic(&self) -> i64 {
        self.user.u + self.user.d
    }

    /// Remaining quota in bytes, never negative.
    pub fn remaining_traffic(&self) -> i64 {
        (self.user.transfer_enable - self.used_traffic()).max(0)
    }
}
