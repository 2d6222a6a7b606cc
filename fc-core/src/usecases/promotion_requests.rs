use std::collections::HashMap;

use super::{authorize_restaurant_owner, load_users_by_id, prelude::*};

#[derive(Debug, Clone)]
pub struct PendingPromotion {
    pub request: PromotionRequest,
    pub review: Review,
    pub promoter: User,
}

/// The queue of pending promoter requests of the
/// restaurant that is owned by the given user, oldest first.
pub fn pending_promotion_requests<R>(repo: &R, owner: &User) -> Result<Vec<PendingPromotion>>
where
    R: RestaurantRepo + PromotionRepo + ReviewRepo + UserRepo,
{
    let restaurant = authorize_restaurant_owner(repo, owner)?;
    let requests = repo.pending_promotion_requests(&restaurant.id)?;

    let review_ids: Vec<_> = requests.iter().map(|r| r.review_id.as_str()).collect();
    let reviews: HashMap<_, _> = repo
        .get_reviews(&review_ids)?
        .into_iter()
        .map(|r| (r.id.clone(), r))
        .collect();
    let promoter_ids: Vec<_> = requests.iter().map(|r| &r.promoter_id).collect();
    let promoters = load_users_by_id(repo, &promoter_ids)?;

    Ok(requests
        .into_iter()
        .filter_map(|request| {
            let review = reviews.get(&request.review_id)?.clone();
            let promoter = promoters.get(&request.promoter_id)?.clone();
            Some(PendingPromotion {
                request,
                review,
                promoter,
            })
        })
        .collect())
}
