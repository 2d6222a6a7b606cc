use super::*;

#[get("/promotions/requests")]
pub fn get_promotion_requests(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::PromotionRequest>> {
    let db = db.shared()?;
    let owner = auth.user(&db)?;
    let pending = usecases::pending_promotion_requests(&db, &owner)?;
    Ok(Json(
        pending.into_iter().map(to_json::pending_promotion).collect(),
    ))
}

#[post(
    "/promotions/approve/<review_id>",
    format = "application/json",
    data = "<approve>"
)]
#[allow(clippy::too_many_arguments)]
pub fn post_approve_promotion(
    connections: sqlite::Connections,
    cipher: &State<Cipher>,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    auth: Auth,
    idempotency: Idempotency,
    review_id: String,
    approve: JsonResult<json::ApprovePromotion>,
) -> Result<json::IssuedCode> {
    let approve = approve?.into_inner();
    let owner = auth.user(&connections.shared()?)?;
    let idempotency_key = idempotency.key()?;
    let review_id = Id::from(review_id);
    let approval = flows::approve_promotion(
        &connections,
        &*cipher.0,
        &cfg.offers,
        &*notify.0,
        &owner,
        usecases::ApprovePromotion {
            review_id: &review_id,
            offer_id: &approve.offer_id,
            idempotency_key: idempotency_key.as_ref(),
        },
    )?;
    Ok(Json(approval.code.into()))
}

#[post("/promotions/redeem", format = "application/json", data = "<redeem>")]
pub fn post_redeem_code(
    connections: sqlite::Connections,
    cipher: &State<Cipher>,
    notify: &State<Notify>,
    auth: Auth,
    idempotency: Idempotency,
    redeem: JsonResult<json::RedeemCode>,
) -> Result<json::RedemptionResult> {
    let redeem = redeem?.into_inner();
    let redeemer = auth.user(&connections.shared()?)?;
    let idempotency_key = idempotency.key()?;
    let outcome = flows::redeem_code(
        &connections,
        &*cipher.0,
        &*notify.0,
        &redeemer,
        &redeem.encrypted_code,
        idempotency_key.as_ref(),
    )?;
    Ok(Json(outcome.redemption.into()))
}
