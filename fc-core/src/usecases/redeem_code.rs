use super::prelude::*;
use crate::{gateways::code_cipher::CodeCipher, repositories::Error as RepoError};

/// Opens a sealed code.
///
/// Every failure is reported as [`Error::InvalidCode`].
pub fn open_redemption_code<C>(cipher: &C, sealed: &str) -> Result<CodePayload>
where
    C: CodeCipher + ?Sized,
{
    let sealed = sealed.trim();
    if sealed.is_empty() {
        return Err(Error::InvalidCode);
    }
    cipher.open(sealed).map_err(|err| {
        log::debug!("Rejecting redemption code: {err}");
        Error::InvalidCode
    })
}

#[derive(Debug, Clone)]
pub struct RedeemCode<'a> {
    pub payload: &'a CodePayload,
    pub idempotency_key: Option<&'a IdempotencyKey>,
}

#[derive(Debug, Clone)]
pub struct RedemptionOutcome {
    pub redemption: Redemption,
    pub replayed: bool,
}

/// Consumes an opened code exactly once and credits the promoter.
pub fn redeem_code<R>(repo: &R, redeemer: &User, redeem: RedeemCode) -> Result<RedemptionOutcome>
where
    R: UserRepo + RedemptionCodeRepo + IdempotencyRepo,
{
    let RedeemCode {
        payload,
        idempotency_key,
    } = redeem;

    if let Some(key) = idempotency_key {
        if let Some(record) = repo.try_get_idempotency_record(&redeemer.id, key)? {
            if record.operation != IdempotentOperation::RedeemCode
                || record.resource_id != payload.code_id
            {
                return Err(Error::IdempotencyKeyReused);
            }
            let code = repo.get_redemption_code(&record.resource_id)?;
            let redemption = Redemption::from_redeemed_code(&code).ok_or_else(|| {
                RepoError::Other(anyhow::anyhow!(
                    "Redemption code {} has been recorded as redeemed but is not",
                    code.id
                ))
            })?;
            return Ok(RedemptionOutcome {
                redemption,
                replayed: true,
            });
        }
    }

    let code = match repo.get_redemption_code(&payload.code_id) {
        Ok(code) => code,
        Err(RepoError::NotFound) => return Err(Error::InvalidCode),
        Err(err) => return Err(err.into()),
    };
    if !code.matches(payload) {
        log::warn!("Redemption code {} does not match its record", code.id);
        return Err(Error::InvalidCode);
    }
    if redeemer.is_restaurant_owner() && !redeemer.owns_restaurant(&code.restaurant_id) {
        return Err(Error::InvalidCode);
    }
    let now = Timestamp::now();
    if code.is_expired_at(now) {
        return Err(Error::CodeExpired);
    }
    repo.consume_redemption_code(&code.id, &redeemer.id, now)
        .map_err(|err| match err {
            RepoError::NotFound => Error::AlreadyRedeemed,
            err => err.into(),
        })?;
    repo.add_loyalty_points(&code.promoter_id, code.reward_points)?;

    if let Some(key) = idempotency_key {
        repo.create_idempotency_record(&IdempotencyRecord {
            owner_id: redeemer.id.clone(),
            key: key.clone(),
            operation: IdempotentOperation::RedeemCode,
            request_ref: code.id.to_string(),
            resource_id: code.id.clone(),
            created_at: now,
        })?;
    }

    let redemption = Redemption {
        code_id: code.id,
        offer_id: code.offer_id,
        restaurant_id: code.restaurant_id,
        promoter_id: code.promoter_id,
        points_awarded: code.reward_points,
        redeemed_at: now,
    };
    Ok(RedemptionOutcome {
        redemption,
        replayed: false,
    })
}
