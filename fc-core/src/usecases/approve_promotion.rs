use super::{authorize_restaurant_owner, prelude::*};
use crate::{gateways::code_cipher::CodeCipher, offers::OfferCatalog, repositories::Error as RepoError};

#[derive(Debug, Clone)]
pub struct ApprovePromotion<'a> {
    pub review_id: &'a Id,
    pub offer_id: &'a str,
    pub idempotency_key: Option<&'a IdempotencyKey>,
}

#[derive(Debug, Clone)]
pub struct Approval {
    pub request: PromotionRequest,
    pub code: RedemptionCode,
    /// The code has been issued by an earlier request
    /// with the same idempotency key.
    pub replayed: bool,
}

/// Approves a pending promoter request and issues exactly
/// one sealed redemption code for it.
pub fn approve_promotion<R, C>(
    repo: &R,
    cipher: &C,
    offers: &OfferCatalog,
    owner: &User,
    approve: ApprovePromotion,
) -> Result<Approval>
where
    R: RestaurantRepo + PromotionRepo + RedemptionCodeRepo + IdempotencyRepo,
    C: CodeCipher + ?Sized,
{
    let ApprovePromotion {
        review_id,
        offer_id,
        idempotency_key,
    } = approve;
    let request = repo.get_promotion_request(review_id)?;
    let restaurant = authorize_restaurant_owner(repo, owner)?;
    if restaurant.id != request.restaurant_id {
        return Err(Error::Forbidden);
    }
    let offer_id = offer_id.parse::<OfferId>()?;

    if let Some(key) = idempotency_key {
        if let Some(record) = repo.try_get_idempotency_record(&owner.id, key)? {
            if record.operation != IdempotentOperation::ApprovePromotion
                || record.request_ref != review_id.as_str()
            {
                return Err(Error::IdempotencyKeyReused);
            }
            let code = repo.get_redemption_code(&record.resource_id)?;
            if code.offer_id != offer_id {
                return Err(Error::IdempotencyKeyReused);
            }
            let request = repo.get_promotion_request(review_id)?;
            return Ok(Approval {
                request,
                code,
                replayed: true,
            });
        }
    }

    if !request.is_pending() {
        return Err(Error::AlreadyApproved);
    }
    let now = Timestamp::now();
    repo.approve_promotion_request(review_id, &offer_id, now)
        .map_err(|err| match err {
            RepoError::NotFound => Error::AlreadyApproved,
            err => err.into(),
        })?;

    let policy = offers.policy(&offer_id);
    let mut code = RedemptionCode {
        id: Id::new(),
        review_id: request.review_id.clone(),
        offer_id: offer_id.clone(),
        restaurant_id: request.restaurant_id.clone(),
        promoter_id: request.promoter_id.clone(),
        sealed: String::new(),
        reward_points: policy.reward_points,
        issued_at: now,
        expires_at: policy.valid_for.map(|valid_for| now + valid_for),
        redeemed_at: None,
        redeemed_by: None,
    };
    code.sealed = cipher.seal(&code.payload()).map_err(Error::CodeCipher)?;
    repo.create_redemption_code(&code).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyApproved,
        err => err.into(),
    })?;

    if let Some(key) = idempotency_key {
        repo.create_idempotency_record(&IdempotencyRecord {
            owner_id: owner.id.clone(),
            key: key.clone(),
            operation: IdempotentOperation::ApprovePromotion,
            request_ref: review_id.to_string(),
            resource_id: code.id.clone(),
            created_at: now,
        })?;
    }

    let request = PromotionRequest {
        status: PromotionStatus::Approved,
        approved_at: Some(now),
        offer_id: Some(offer_id),
        ..request
    };
    Ok(Approval {
        request,
        code,
        replayed: false,
    })
}
