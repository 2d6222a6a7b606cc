use super::*;

impl<'a> RedemptionCodeRepo for DbReadOnly<'a> {
    fn create_redemption_code(&self, _code: &RedemptionCode) -> Result<()> {
        unreachable!();
    }
    fn consume_redemption_code(
        &self,
        _id: &Id,
        _redeemed_by: &Id,
        _redeemed_at: Timestamp,
    ) -> Result<()> {
        unreachable!();
    }

    fn get_redemption_code(&self, id: &Id) -> Result<RedemptionCode> {
        get_redemption_code(&mut self.conn.borrow_mut(), id)
    }
    fn get_redemption_code_of_review(&self, review_id: &Id) -> Result<RedemptionCode> {
        get_redemption_code_of_review(&mut self.conn.borrow_mut(), review_id)
    }
}

impl<'a> RedemptionCodeRepo for DbConnection<'a> {
    fn create_redemption_code(&self, code: &RedemptionCode) -> Result<()> {
        create_redemption_code(&mut self.conn.borrow_mut(), code)
    }
    fn consume_redemption_code(
        &self,
        id: &Id,
        redeemed_by: &Id,
        redeemed_at: Timestamp,
    ) -> Result<()> {
        consume_redemption_code(&mut self.conn.borrow_mut(), id, redeemed_by, redeemed_at)
    }

    fn get_redemption_code(&self, id: &Id) -> Result<RedemptionCode> {
        get_redemption_code(&mut self.conn.borrow_mut(), id)
    }
    fn get_redemption_code_of_review(&self, review_id: &Id) -> Result<RedemptionCode> {
        get_redemption_code_of_review(&mut self.conn.borrow_mut(), review_id)
    }
}

fn create_redemption_code(conn: &mut SqliteConnection, c: &RedemptionCode) -> Result<()> {
    let new_code = models::NewRedemptionCode {
        id: c.id.as_str(),
        review_id: c.review_id.as_str(),
        offer_id: c.offer_id.as_str(),
        restaurant_id: c.restaurant_id.as_str(),
        promoter_id: c.promoter_id.as_str(),
        sealed: &c.sealed,
        reward_points: points_value(c.reward_points)?,
        issued_at: c.issued_at.as_millis(),
        expires_at: c.expires_at.map(Timestamp::as_millis),
        redeemed_at: c.redeemed_at.map(Timestamp::as_millis),
        redeemed_by: c.redeemed_by.as_ref().map(Id::as_str),
    };
    diesel::insert_into(schema::redemption_codes::table)
        .values(&new_code)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn consume_redemption_code(
    conn: &mut SqliteConnection,
    id: &Id,
    redeemed_by: &Id,
    redeemed_at: Timestamp,
) -> Result<()> {
    use schema::redemption_codes::dsl;
    // Conditional update: Only a single concurrent
    // request is able to mark the code as redeemed.
    let count = diesel::update(
        dsl::redemption_codes
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::redeemed_at.is_null()),
    )
    .set((
        dsl::redeemed_at.eq(Some(redeemed_at.as_millis())),
        dsl::redeemed_by.eq(Some(redeemed_by.as_str())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_redemption_code(conn: &mut SqliteConnection, id: &Id) -> Result<RedemptionCode> {
    use schema::redemption_codes::dsl;
    let code = dsl::redemption_codes
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::RedemptionCodeEntity>(conn)
        .map_err(from_diesel_err)?;
    load_redemption_code(code)
}

fn get_redemption_code_of_review(conn: &mut SqliteConnection, review_id: &Id) -> Result<RedemptionCode> {
    use schema::redemption_codes::dsl;
    let code = dsl::redemption_codes
        .filter(dsl::review_id.eq(review_id.as_str()))
        .first::<models::RedemptionCodeEntity>(conn)
        .map_err(from_diesel_err)?;
    load_redemption_code(code)
}

fn load_redemption_code(c: models::RedemptionCodeEntity) -> Result<RedemptionCode> {
    let models::RedemptionCodeEntity {
        id,
        review_id,
        offer_id,
        restaurant_id,
        promoter_id,
        sealed,
        reward_points,
        issued_at,
        expires_at,
        redeemed_at,
        redeemed_by,
    } = c;
    Ok(RedemptionCode {
        id: id.into(),
        review_id: review_id.into(),
        offer_id: load_offer_id(offer_id),
        restaurant_id: restaurant_id.into(),
        promoter_id: promoter_id.into(),
        sealed,
        reward_points: load_points(reward_points)?,
        issued_at: Timestamp::from_millis(issued_at),
        expires_at: expires_at.map(Timestamp::from_millis),
        redeemed_at: redeemed_at.map(Timestamp::from_millis),
        redeemed_by: redeemed_by.map(Into::into),
    })
}
