use std::{collections::HashMap, time::Duration};

use crate::entities::OfferId;

/// What the promoter receives when a code for an offer is redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferPolicy {
    pub reward_points: u64,
    /// Codes never expire if `None`.
    pub valid_for: Option<Duration>,
}

impl OfferPolicy {
    pub const DEFAULT_REWARD_POINTS: u64 = 10;
}

impl Default for OfferPolicy {
    fn default() -> Self {
        Self {
            reward_points: Self::DEFAULT_REWARD_POINTS,
            valid_for: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    default_policy: OfferPolicy,
    policies: HashMap<OfferId, OfferPolicy>,
}

impl OfferCatalog {
    pub fn new(default_policy: OfferPolicy) -> Self {
        Self {
            default_policy,
            policies: HashMap::new(),
        }
    }

    pub fn with_offer(mut self, offer_id: OfferId, policy: OfferPolicy) -> Self {
        self.policies.insert(offer_id, policy);
        self
    }

    pub fn policy(&self, offer_id: &OfferId) -> &OfferPolicy {
        self.policies.get(offer_id).unwrap_or(&self.default_policy)
    }
}
