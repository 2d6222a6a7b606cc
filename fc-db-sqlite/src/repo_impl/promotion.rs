use super::*;

impl<'a> PromotionRepo for DbReadOnly<'a> {
    fn create_promotion_request(&self, _request: &PromotionRequest) -> Result<()> {
        unreachable!();
    }
    fn approve_promotion_request(
        &self,
        _review_id: &Id,
        _offer_id: &OfferId,
        _approved_at: Timestamp,
    ) -> Result<()> {
        unreachable!();
    }

    fn get_promotion_request(&self, review_id: &Id) -> Result<PromotionRequest> {
        get_promotion_request(&mut self.conn.borrow_mut(), review_id)
    }
    fn pending_promotion_requests(&self, restaurant_id: &Id) -> Result<Vec<PromotionRequest>> {
        pending_promotion_requests(&mut self.conn.borrow_mut(), restaurant_id)
    }
}

impl<'a> PromotionRepo for DbConnection<'a> {
    fn create_promotion_request(&self, request: &PromotionRequest) -> Result<()> {
        create_promotion_request(&mut self.conn.borrow_mut(), request)
    }
    fn approve_promotion_request(
        &self,
        review_id: &Id,
        offer_id: &OfferId,
        approved_at: Timestamp,
    ) -> Result<()> {
        approve_promotion_request(&mut self.conn.borrow_mut(), review_id, offer_id, approved_at)
    }

    fn get_promotion_request(&self, review_id: &Id) -> Result<PromotionRequest> {
        get_promotion_request(&mut self.conn.borrow_mut(), review_id)
    }
    fn pending_promotion_requests(&self, restaurant_id: &Id) -> Result<Vec<PromotionRequest>> {
        pending_promotion_requests(&mut self.conn.borrow_mut(), restaurant_id)
    }
}

fn create_promotion_request(conn: &mut SqliteConnection, r: &PromotionRequest) -> Result<()> {
    let new_request = models::NewPromotionRequest {
        review_id: r.review_id.as_str(),
        restaurant_id: r.restaurant_id.as_str(),
        promoter_id: r.promoter_id.as_str(),
        status: r.status.into(),
        created_at: r.created_at.as_millis(),
        approved_at: r.approved_at.map(Timestamp::as_millis),
        offer_id: r.offer_id.as_ref().map(OfferId::as_str),
    };
    diesel::insert_into(schema::promotion_requests::table)
        .values(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn approve_promotion_request(
    conn: &mut SqliteConnection,
    review_id: &Id,
    offer_id: &OfferId,
    approved_at: Timestamp,
) -> Result<()> {
    use schema::promotion_requests::dsl;
    let pending = PromotionStatusPrimitive::from(PromotionStatus::Pending);
    let approved = PromotionStatusPrimitive::from(PromotionStatus::Approved);
    // Only a pending request is updated
    let count = diesel::update(
        dsl::promotion_requests
            .filter(dsl::review_id.eq(review_id.as_str()))
            .filter(dsl::status.eq(pending)),
    )
    .set((
        dsl::status.eq(approved),
        dsl::approved_at.eq(Some(approved_at.as_millis())),
        dsl::offer_id.eq(Some(offer_id.as_str())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_promotion_request(conn: &mut SqliteConnection, review_id: &Id) -> Result<PromotionRequest> {
    use schema::promotion_requests::dsl;
    let request = dsl::promotion_requests
        .filter(dsl::review_id.eq(review_id.as_str()))
        .first::<models::PromotionRequestEntity>(conn)
        .map_err(from_diesel_err)?;
    load_promotion_request(request)
}

fn pending_promotion_requests(
    conn: &mut SqliteConnection,
    restaurant_id: &Id,
) -> Result<Vec<PromotionRequest>> {
    use schema::promotion_requests::dsl;
    dsl::promotion_requests
        .filter(dsl::restaurant_id.eq(restaurant_id.as_str()))
        .filter(dsl::status.eq(PromotionStatusPrimitive::from(PromotionStatus::Pending)))
        .order_by((dsl::created_at.asc(), dsl::review_id.asc()))
        .load::<models::PromotionRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_promotion_request)
        .collect()
}

fn load_promotion_request(r: models::PromotionRequestEntity) -> Result<PromotionRequest> {
    let models::PromotionRequestEntity {
        review_id,
        restaurant_id,
        promoter_id,
        status,
        created_at,
        approved_at,
        offer_id,
    } = r;
    let status = PromotionStatus::try_from(status).map_err(|err| repo::Error::Other(err.into()))?;
    Ok(PromotionRequest {
        review_id: review_id.into(),
        restaurant_id: restaurant_id.into(),
        promoter_id: promoter_id.into(),
        status,
        created_at: Timestamp::from_millis(created_at),
        approved_at: approved_at.map(Timestamp::from_millis),
        offer_id: offer_id.map(load_offer_id),
    })
}
