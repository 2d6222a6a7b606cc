use fc_entities::{
    promotion::PromotionRequest,
    redemption::{Redemption, RedemptionCode},
    user::User,
};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    UserRegistered {
        user: &'a User,
    },
    PromotionRequested {
        request: &'a PromotionRequest,
    },
    PromotionApproved {
        request: &'a PromotionRequest,
        code: &'a RedemptionCode,
    },
    CodeRedeemed {
        redemption: &'a Redemption,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    UserRegistered,
    PromotionRequested,
    PromotionApproved,
    CodeRedeemed,
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::UserRegistered { .. } => NotificationType::UserRegistered,
            Self::PromotionRequested { .. } => NotificationType::PromotionRequested,
            Self::PromotionApproved { .. } => NotificationType::PromotionApproved,
            Self::CodeRedeemed { .. } => NotificationType::CodeRedeemed,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
