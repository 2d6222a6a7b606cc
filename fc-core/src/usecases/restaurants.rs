use std::cmp::Ordering;

use super::{load_users_by_id, prelude::*};

pub const MAX_NEARBY_RESTAURANTS: usize = 100;

#[derive(Debug, Clone)]
pub struct NearbyRestaurant {
    pub restaurant: Restaurant,
    pub distance: Distance,
}

/// Lists the restaurants closest to the given position,
/// nearest first.
pub fn nearby_restaurants<R: RestaurantRepo>(
    repo: &R,
    lat: f64,
    lng: f64,
    limit: usize,
) -> Result<Vec<NearbyRestaurant>> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let mut nearby: Vec<_> = repo
        .all_restaurants()?
        .into_iter()
        .filter_map(|restaurant| {
            MapPoint::distance(pos, restaurant.pos)
                .map(|distance| NearbyRestaurant { restaurant, distance })
        })
        .collect();
    nearby.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.restaurant.id.cmp(&b.restaurant.id))
    });
    nearby.truncate(limit.min(MAX_NEARBY_RESTAURANTS));
    Ok(nearby)
}

#[derive(Debug, Clone)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author: User,
}

#[derive(Debug, Clone)]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub reviews: Vec<ReviewWithAuthor>,
}

pub fn get_restaurant_details<R>(repo: &R, id: &Id) -> Result<RestaurantDetails>
where
    R: RestaurantRepo + ReviewRepo + UserRepo,
{
    let restaurant = repo.get_restaurant(id)?;
    let reviews = repo.reviews_of_restaurant(id)?;
    let author_ids: Vec<_> = reviews.iter().map(|r| &r.author_id).collect();
    let authors = load_users_by_id(repo, &author_ids)?;
    let reviews = reviews
        .into_iter()
        .filter_map(|review| {
            let Some(author) = authors.get(&review.author_id).cloned() else {
                log::warn!("Missing author {} of review {}", review.author_id, review.id);
                return None;
            };
            Some(ReviewWithAuthor { review, author })
        })
        .collect();
    Ok(RestaurantDetails {
        restaurant,
        reviews,
    })
}
