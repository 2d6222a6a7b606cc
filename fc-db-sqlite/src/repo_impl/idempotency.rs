use super::*;

impl<'a> IdempotencyRepo for DbReadOnly<'a> {
    fn create_idempotency_record(&self, _record: &IdempotencyRecord) -> Result<()> {
        unreachable!();
    }
    fn try_get_idempotency_record(
        &self,
        owner_id: &Id,
        key: &IdempotencyKey,
    ) -> Result<Option<IdempotencyRecord>> {
        try_get_idempotency_record(&mut self.conn.borrow_mut(), owner_id, key)
    }
}

impl<'a> IdempotencyRepo for DbConnection<'a> {
    fn create_idempotency_record(&self, record: &IdempotencyRecord) -> Result<()> {
        create_idempotency_record(&mut self.conn.borrow_mut(), record)
    }
    fn try_get_idempotency_record(
        &self,
        owner_id: &Id,
        key: &IdempotencyKey,
    ) -> Result<Option<IdempotencyRecord>> {
        try_get_idempotency_record(&mut self.conn.borrow_mut(), owner_id, key)
    }
}

fn create_idempotency_record(conn: &mut SqliteConnection, r: &IdempotencyRecord) -> Result<()> {
    let new_key = models::NewIdempotencyKey {
        owner_id: r.owner_id.as_str(),
        idem_key: r.key.as_str(),
        operation: r.operation.as_ref(),
        request_ref: &r.request_ref,
        resource_id: r.resource_id.as_str(),
        created_at: r.created_at.as_millis(),
    };
    diesel::insert_into(schema::idempotency_keys::table)
        .values(&new_key)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_idempotency_record(
    conn: &mut SqliteConnection,
    owner_id: &Id,
    key: &IdempotencyKey,
) -> Result<Option<IdempotencyRecord>> {
    use schema::idempotency_keys::dsl;
    dsl::idempotency_keys
        .filter(dsl::owner_id.eq(owner_id.as_str()))
        .filter(dsl::idem_key.eq(key.as_str()))
        .first::<models::IdempotencyKeyEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_idempotency_record)
        .transpose()
}

fn load_idempotency_record(r: models::IdempotencyKeyEntity) -> Result<IdempotencyRecord> {
    let models::IdempotencyKeyEntity {
        owner_id,
        idem_key,
        operation,
        request_ref,
        resource_id,
        created_at,
    } = r;
    let key = idem_key
        .parse()
        .map_err(|()| anyhow!("Invalid idempotency key: {idem_key}"))?;
    let operation = operation
        .parse()
        .map_err(|_| anyhow!("Invalid idempotent operation: {operation}"))?;
    Ok(IdempotencyRecord {
        owner_id: owner_id.into(),
        key,
        operation,
        request_ref,
        resource_id: resource_id.into(),
        created_at: Timestamp::from_millis(created_at),
    })
}
