use super::*;

impl<'a> RestaurantRepo for DbReadOnly<'a> {
    fn create_restaurant(&self, _restaurant: &Restaurant) -> Result<()> {
        unreachable!();
    }

    fn get_restaurant(&self, id: &Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
    fn get_restaurants(&self, ids: &[&str]) -> Result<Vec<Restaurant>> {
        get_restaurants(&mut self.conn.borrow_mut(), ids)
    }
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
}

impl<'a> RestaurantRepo for DbConnection<'a> {
    fn create_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        create_restaurant(&mut self.conn.borrow_mut(), restaurant)
    }

    fn get_restaurant(&self, id: &Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
    fn get_restaurants(&self, ids: &[&str]) -> Result<Vec<Restaurant>> {
        get_restaurants(&mut self.conn.borrow_mut(), ids)
    }
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
}

fn create_restaurant(conn: &mut SqliteConnection, r: &Restaurant) -> Result<()> {
    debug_assert!(r.pos.is_valid());
    let new_restaurant = models::NewRestaurant {
        id: r.id.as_str(),
        owner_id: r.owner_id.as_str(),
        name: &r.name,
        address: &r.address,
        lat: r.pos.lat(),
        lon: r.pos.lng(),
        cuisine_type: &r.cuisine_type,
        is_verified: r.is_verified,
        created_at: r.created_at.as_millis(),
    };
    diesel::insert_into(schema::restaurants::table)
        .values(&new_restaurant)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_restaurant(conn: &mut SqliteConnection, id: &Id) -> Result<Restaurant> {
    use schema::restaurants::dsl;
    let restaurant = dsl::restaurants
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_restaurant(restaurant))
}

fn get_restaurants(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Restaurant>> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .filter(dsl::id.eq_any(ids))
        .load::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_restaurant)
        .collect())
}

fn all_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .load::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_restaurant)
        .collect())
}

fn load_restaurant(r: models::RestaurantEntity) -> Restaurant {
    let models::RestaurantEntity {
        id,
        owner_id,
        name,
        address,
        lat,
        lon,
        cuisine_type,
        is_verified,
        created_at,
    } = r;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lon).unwrap_or_else(|| {
        log::warn!("Restaurant {id} has an invalid position: ({lat}, {lon})");
        MapPoint::default()
    });
    Restaurant {
        id: id.into(),
        owner_id: owner_id.into(),
        name,
        address,
        pos,
        cuisine_type,
        is_verified,
        created_at: Timestamp::from_millis(created_at),
    }
}
