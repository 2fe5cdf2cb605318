use serde::Serialize;
use tracing::info;

use linkfeed_shared::plan::PRO_FEATURES;
use linkfeed_shared::{Plan, ProFeature};

use crate::commands::identity::notify_identity;
use crate::error::ClientError;
use crate::state::{lock, AppState, SharedState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDto {
    pub feature: ProFeature,
    pub label: &'static str,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatus {
    pub plan: Plan,
    pub is_pro: bool,
    pub features: Vec<FeatureDto>,
}

fn status(state: &AppState) -> PlanStatus {
    let plan = Plan::of(state.store.identity());
    PlanStatus {
        plan,
        is_pro: plan == Plan::Pro,
        features: PRO_FEATURES
            .iter()
            .map(|&feature| FeatureDto {
                feature,
                label: feature.label(),
                unlocked: plan.allows(feature),
            })
            .collect(),
    }
}

pub fn plan_status(state: &SharedState) -> Result<PlanStatus, ClientError> {
    let guard = lock(state)?;
    Ok(status(&guard))
}

/// Simulated checkout: flips the local identity to Pro and closes the
/// subscription panel. Nothing happens before signup.
pub fn upgrade(state: &SharedState) -> Result<PlanStatus, ClientError> {
    let mut guard = lock(state)?;
    if guard.store.upgrade() {
        guard.subscription_open = false;
        notify_identity(&guard);
        info!("Pro plan activated");
    }
    Ok(status(&guard))
}

pub fn open_subscription(state: &SharedState) -> Result<(), ClientError> {
    lock(state)?.subscription_open = true;
    Ok(())
}

pub fn close_subscription(state: &SharedState) -> Result<(), ClientError> {
    lock(state)?.subscription_open = false;
    Ok(())
}
