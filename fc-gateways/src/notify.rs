use std::collections::HashSet;

use fc_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};

/// Reports domain events through the log.
#[derive(Debug, Clone)]
pub struct Notify {
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new(notify_on: HashSet<NotificationType>) -> Self {
        Self { notify_on }
    }

    pub fn all() -> Self {
        use NotificationType as T;
        Self::new(
            [
                T::UserRegistered,
                T::PromotionRequested,
                T::PromotionApproved,
                T::CodeRedeemed,
            ]
            .into_iter()
            .collect(),
        )
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        match event {
            E::UserRegistered { user } => {
                log::info!(
                    "New {} account {} registered for user {}",
                    user.kind.as_ref(),
                    user.id,
                    user.username
                );
            }
            E::PromotionRequested { request } => {
                log::info!(
                    "User {} requested a promotion for review {} of restaurant {}",
                    request.promoter_id,
                    request.review_id,
                    request.restaurant_id
                );
            }
            E::PromotionApproved { request, code } => {
                log::info!(
                    "Promotion of review {} approved: Issued code {} for offer {}",
                    request.review_id,
                    code.id,
                    code.offer_id
                );
            }
            E::CodeRedeemed { redemption } => {
                log::info!(
                    "Code {} redeemed at restaurant {}: Credited {} points to user {}",
                    redemption.code_id,
                    redemption.restaurant_id,
                    redemption.points_awarded,
                    redemption.promoter_id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::entities::*;

    #[test]
    fn skip_unselected_events() {
        let notify = Notify::new([NotificationType::CodeRedeemed].into_iter().collect());
        let request = PromotionRequest::new_pending(
            "review".into(),
            "trattoria".into(),
            "anna".into(),
            Timestamp::now(),
        );
        assert!(notify.skip(&NotificationEvent::PromotionRequested { request: &request }));
        let redemption = Redemption {
            code_id: "code".into(),
            offer_id: "OFFER_SUMMER15".parse().unwrap(),
            restaurant_id: "trattoria".into(),
            promoter_id: "anna".into(),
            points_awarded: 10,
            redeemed_at: Timestamp::now(),
        };
        assert!(!notify.skip(&NotificationEvent::CodeRedeemed {
            redemption: &redemption
        }));
        assert!(!Notify::all().skip(&NotificationEvent::PromotionRequested { request: &request }));
    }
}
