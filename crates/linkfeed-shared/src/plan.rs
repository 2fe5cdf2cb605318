use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Features unlocked by the Pro subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProFeature {
    AdvancedAnalytics,
    VerifiedBadge,
    UnlimitedHistory,
    PrioritySupport,
}

pub const PRO_FEATURES: [ProFeature; 4] = [
    ProFeature::AdvancedAnalytics,
    ProFeature::VerifiedBadge,
    ProFeature::UnlimitedHistory,
    ProFeature::PrioritySupport,
];

impl ProFeature {
    pub fn label(self) -> &'static str {
        match self {
            Self::AdvancedAnalytics => "Advanced Analytics Dashboard",
            Self::VerifiedBadge => "Verified Profile Badge",
            Self::UnlimitedHistory => "Unlimited Link History",
            Self::PrioritySupport => "Priority Support",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    /// Plan of the given identity. No identity means Free.
    pub fn of(identity: Option<&Identity>) -> Self {
        match identity {
            Some(id) if id.is_privileged => Self::Pro,
            _ => Self::Free,
        }
    }

    pub fn allows(self, _feature: ProFeature) -> bool {
        matches!(self, Self::Pro)
    }

    /// Features this plan unlocks.
    pub fn features(self) -> Vec<ProFeature> {
        PRO_FEATURES
            .iter()
            .copied()
            .filter(|f| self.allows(*f))
            .collect()
    }
}
