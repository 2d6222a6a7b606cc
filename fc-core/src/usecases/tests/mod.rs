use super::{create_review, prelude::*, NewReview};
use crate::{
    gateways::code_cipher::{CodeCipher, CodeCipherError},
    repositories::Error as RepoError,
};
use fc_entities::builders::*;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Restaurant {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Review {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PromotionRequest {
    fn key(&self) -> &str {
        self.review_id.as_str()
    }
}

impl Key for RedemptionCode {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub reviews: RefCell<Vec<Review>>,
    pub promotions: RefCell<Vec<PromotionRequest>>,
    pub codes: RefCell<Vec<RedemptionCode>>,
    pub follows: RefCell<Vec<Follow>>,
    pub idempotency_records: RefCell<Vec<IdempotencyRecord>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn get_all<T: Clone + Key>(objects: &[T], ids: &[&str]) -> Vec<T> {
    objects
        .iter()
        .filter(|x| ids.iter().any(|id| x.key() == *id))
        .cloned()
        .collect()
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn find_mut<'a, T: Key>(objects: &'a mut [T], id: &str) -> RepoResult<&'a mut T> {
    objects
        .iter_mut()
        .find(|x| x.key() == id)
        .ok_or(RepoError::NotFound)
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn get_user(&self, id: &Id) -> RepoResult<User> {
        get(&self.users.borrow(), id.as_str())
    }
    fn get_users(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        Ok(get_all(&self.users.borrow(), ids))
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?
            .ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
    fn set_user_restaurant(&self, user_id: &Id, restaurant_id: &Id) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        find_mut(&mut users, user_id.as_str())?.restaurant_id = Some(restaurant_id.clone());
        Ok(())
    }
    fn add_loyalty_points(&self, user_id: &Id, points: u64) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let user = find_mut(&mut users, user_id.as_str())?;
        user.loyalty_points = user.loyalty_points.saturating_add(points);
        Ok(())
    }
}

impl RestaurantRepo for MockDb {
    fn create_restaurant(&self, restaurant: &Restaurant) -> RepoResult<()> {
        create(&mut self.restaurants.borrow_mut(), restaurant.clone())
    }
    fn get_restaurant(&self, id: &Id) -> RepoResult<Restaurant> {
        get(&self.restaurants.borrow(), id.as_str())
    }
    fn get_restaurants(&self, ids: &[&str]) -> RepoResult<Vec<Restaurant>> {
        Ok(get_all(&self.restaurants.borrow(), ids))
    }
    fn all_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.restaurants.borrow().clone())
    }
}

fn newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        create(&mut self.reviews.borrow_mut(), review.clone())
    }
    fn get_review(&self, id: &Id) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id.as_str())
    }
    fn get_reviews(&self, ids: &[&str]) -> RepoResult<Vec<Review>> {
        Ok(get_all(&self.reviews.borrow(), ids))
    }
    fn recent_reviews(&self, limit: usize) -> RepoResult<Vec<Review>> {
        let mut reviews = self.reviews.borrow().clone();
        newest_first(&mut reviews);
        reviews.truncate(limit);
        Ok(reviews)
    }
    fn reviews_of_restaurant(&self, restaurant_id: &Id) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| &r.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        newest_first(&mut reviews);
        Ok(reviews)
    }
}

impl PromotionRepo for MockDb {
    fn create_promotion_request(&self, request: &PromotionRequest) -> RepoResult<()> {
        create(&mut self.promotions.borrow_mut(), request.clone())
    }
    fn get_promotion_request(&self, review_id: &Id) -> RepoResult<PromotionRequest> {
        get(&self.promotions.borrow(), review_id.as_str())
    }
    fn pending_promotion_requests(&self, restaurant_id: &Id) -> RepoResult<Vec<PromotionRequest>> {
        let mut requests: Vec<_> = self
            .promotions
            .borrow()
            .iter()
            .filter(|p| &p.restaurant_id == restaurant_id && p.is_pending())
            .cloned()
            .collect();
        requests.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.review_id.cmp(&b.review_id))
        });
        Ok(requests)
    }
    fn approve_promotion_request(
        &self,
        review_id: &Id,
        offer_id: &OfferId,
        approved_at: Timestamp,
    ) -> RepoResult<()> {
        let mut promotions = self.promotions.borrow_mut();
        let request = find_mut(&mut promotions, review_id.as_str())?;
        if !request.is_pending() {
            return Err(RepoError::NotFound);
        }
        request.status = PromotionStatus::Approved;
        request.approved_at = Some(approved_at);
        request.offer_id = Some(offer_id.clone());
        Ok(())
    }
}

impl RedemptionCodeRepo for MockDb {
    fn create_redemption_code(&self, code: &RedemptionCode) -> RepoResult<()> {
        if self
            .codes
            .borrow()
            .iter()
            .any(|c| c.review_id == code.review_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.codes.borrow_mut(), code.clone())
    }
    fn get_redemption_code(&self, id: &Id) -> RepoResult<RedemptionCode> {
        get(&self.codes.borrow(), id.as_str())
    }
    fn get_redemption_code_of_review(&self, review_id: &Id) -> RepoResult<RedemptionCode> {
        self.codes
            .borrow()
            .iter()
            .find(|c| &c.review_id == review_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn consume_redemption_code(
        &self,
        id: &Id,
        redeemed_by: &Id,
        redeemed_at: Timestamp,
    ) -> RepoResult<()> {
        let mut codes = self.codes.borrow_mut();
        let code = find_mut(&mut codes, id.as_str())?;
        if code.redeemed_at.is_some() {
            return Err(RepoError::NotFound);
        }
        code.redeemed_at = Some(redeemed_at);
        code.redeemed_by = Some(redeemed_by.clone());
        Ok(())
    }
}

impl FollowRepo for MockDb {
    fn create_follow(&self, follow: &Follow) -> RepoResult<bool> {
        if self.is_following(&follow.follower_id, &follow.following_id)? {
            return Ok(false);
        }
        self.follows.borrow_mut().push(follow.clone());
        Ok(true)
    }
    fn is_following(&self, follower_id: &Id, following_id: &Id) -> RepoResult<bool> {
        Ok(self
            .follows
            .borrow()
            .iter()
            .any(|f| &f.follower_id == follower_id && &f.following_id == following_id))
    }
    fn count_followers(&self, user_id: &Id) -> RepoResult<usize> {
        Ok(self
            .follows
            .borrow()
            .iter()
            .filter(|f| &f.following_id == user_id)
            .count())
    }
}

impl IdempotencyRepo for MockDb {
    fn create_idempotency_record(&self, record: &IdempotencyRecord) -> RepoResult<()> {
        if self
            .try_get_idempotency_record(&record.owner_id, &record.key)?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        self.idempotency_records.borrow_mut().push(record.clone());
        Ok(())
    }
    fn try_get_idempotency_record(
        &self,
        owner_id: &Id,
        key: &IdempotencyKey,
    ) -> RepoResult<Option<IdempotencyRecord>> {
        Ok(self
            .idempotency_records
            .borrow()
            .iter()
            .find(|r| &r.owner_id == owner_id && &r.key == key)
            .cloned())
    }
}

/// A transparent cipher with a checksum that detects tampering.
pub struct FakeCipher;

fn checksum(s: &str) -> u64 {
    s.bytes()
        .fold(17u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
}

impl CodeCipher for FakeCipher {
    fn seal(&self, p: &CodePayload) -> std::result::Result<String, CodeCipherError> {
        let expires_at = p
            .expires_at
            .map(|t| t.as_millis().to_string())
            .unwrap_or_else(|| "-".into());
        let body = format!(
            "{}|{}|{}|{}|{}|{}|{}",
            p.code_id,
            p.offer_id,
            p.restaurant_id,
            p.reviewer_id,
            p.review_id,
            p.issued_at.as_millis(),
            expires_at
        );
        Ok(format!("{body}#{:x}", checksum(&body)))
    }

    fn open(&self, sealed: &str) -> std::result::Result<CodePayload, CodeCipherError> {
        let (body, sum) = sealed.rsplit_once('#').ok_or(CodeCipherError::Malformed)?;
        if format!("{:x}", checksum(body)) != sum {
            return Err(CodeCipherError::Unauthentic);
        }
        let parts: Vec<_> = body.split('|').collect();
        let [code_id, offer_id, restaurant_id, reviewer_id, review_id, issued_at, expires_at] =
            parts[..]
        else {
            return Err(CodeCipherError::Malformed);
        };
        let millis = |s: &str| {
            s.parse::<i64>()
                .map(Timestamp::from_millis)
                .map_err(|_| CodeCipherError::Malformed)
        };
        Ok(CodePayload {
            code_id: code_id.into(),
            offer_id: offer_id.parse().map_err(|_| CodeCipherError::Malformed)?,
            restaurant_id: restaurant_id.into(),
            reviewer_id: reviewer_id.into(),
            review_id: review_id.into(),
            issued_at: millis(issued_at)?,
            expires_at: match expires_at {
                "-" => None,
                s => Some(millis(s)?),
            },
        })
    }
}

/// A restaurant with its owner and a foodie.
pub struct Fixture {
    pub db: MockDb,
    pub owner: User,
    pub restaurant: Restaurant,
    pub foodie: User,
}

impl Fixture {
    pub fn new() -> Self {
        let db = MockDb::default();
        let owner = User::build()
            .id("owner")
            .username("mario")
            .email("mario@example.com")
            .kind(UserKind::RestaurantOwner)
            .restaurant_id("trattoria")
            .finish();
        let restaurant = Restaurant::build()
            .id("trattoria")
            .owner_id("owner")
            .finish();
        let foodie = User::build()
            .id("foodie")
            .username("anna")
            .email("anna@example.com")
            .finish();
        db.users.borrow_mut().push(owner.clone());
        db.users.borrow_mut().push(foodie.clone());
        db.restaurants.borrow_mut().push(restaurant.clone());
        Self {
            db,
            owner,
            restaurant,
            foodie,
        }
    }

    fn review(&self, is_promoter_request: bool) -> Id {
        let review = NewReview {
            rating: 5,
            text: "Best tiramisu in town".into(),
            photo_urls: vec![],
            is_promoter_request,
        };
        create_review(&self.db, &self.foodie, &self.restaurant.id, review)
            .unwrap()
            .review
            .id
    }

    pub fn promoter_review(&self) -> Id {
        self.review(true)
    }

    pub fn plain_review(&self) -> Id {
        self.review(false)
    }

    /// Registers the owner of another restaurant.
    pub fn other_owner(&self) -> User {
        let restaurant = Restaurant::build().owner_id("other-owner").finish();
        let owner = User::build()
            .id("other-owner")
            .email("luigi@example.com")
            .kind(UserKind::RestaurantOwner)
            .restaurant_id(restaurant.id.as_str())
            .finish();
        self.db.restaurants.borrow_mut().push(restaurant);
        self.db.users.borrow_mut().push(owner.clone());
        owner
    }
}

#[test]
fn fake_cipher_detects_tampering() {
    let payload = CodePayload {
        code_id: Id::new(),
        offer_id: "OFFER_SUMMER15".parse().unwrap(),
        restaurant_id: Id::new(),
        reviewer_id: Id::new(),
        review_id: Id::new(),
        issued_at: Timestamp::now(),
        expires_at: None,
    };
    let sealed = FakeCipher.seal(&payload).unwrap();
    assert_eq!(payload, FakeCipher.open(&sealed).unwrap());
    assert!(FakeCipher.open(&sealed.replace("OFFER", "OFFRE")).is_err());
}
