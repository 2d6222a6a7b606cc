use reqwest::blocking::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use fc_boundary::{
    Ack, ApprovePromotion, IssuedCode, NewReview, PromotionRequest, RedeemCode, RedemptionResult,
    Review, Token, User,
};

use crate::{into_json, Result};

const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Authorized Foodie's Circle API
///
/// Dropping the session logs the user out.
#[derive(Debug, Clone)]
pub struct UserApi {
    url: String,
    client: Client,
    token: Token,
}

impl UserApi {
    #[must_use]
    pub fn new(url: String, client: Client, token: Token) -> Self {
        Self { url, client, token }
    }
    fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.token.token)
    }
    fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.add_auth_headers(req).send()?;
        into_json(response)
    }
    fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data).send()?;
        into_json(response)
    }
    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", self.auth_header_value())
    }
    fn with_idempotency_key(req: RequestBuilder, key: Option<&str>) -> RequestBuilder {
        match key {
            Some(key) => req.header(IDEMPOTENCY_KEY_HEADER, key),
            None => req,
        }
    }
    pub fn user_info(&self) -> Result<User> {
        let url = format!("{}/users/me", self.url);
        self.send(self.client.get(&url))
    }
    pub fn follow(&self, user_id: &str) -> Result<()> {
        let url = format!("{}/users/{user_id}/follow", self.url);
        let _: Ack = self.send(self.client.post(&url))?;
        Ok(())
    }
    pub fn create_review(&self, restaurant_id: &str, review: &NewReview) -> Result<Review> {
        let url = format!("{}/restaurants/{restaurant_id}/reviews", self.url);
        self.send_json(self.client.post(&url), review)
    }
    pub fn promotion_requests(&self) -> Result<Vec<PromotionRequest>> {
        let url = format!("{}/promotions/requests", self.url);
        self.send(self.client.get(&url))
    }
    pub fn approve_promotion(
        &self,
        review_id: &str,
        offer_id: &str,
        idempotency_key: Option<&str>,
    ) -> Result<IssuedCode> {
        let url = format!("{}/promotions/approve/{review_id}", self.url);
        let req = Self::with_idempotency_key(self.client.post(&url), idempotency_key);
        let approve = ApprovePromotion {
            offer_id: offer_id.to_owned(),
        };
        self.send_json(req, &approve)
    }
    pub fn redeem_code(
        &self,
        encrypted_code: &str,
        idempotency_key: Option<&str>,
    ) -> Result<RedemptionResult> {
        let url = format!("{}/promotions/redeem", self.url);
        let req = Self::with_idempotency_key(self.client.post(&url), idempotency_key);
        let redeem = RedeemCode {
            encrypted_code: encrypted_code.to_owned(),
        };
        self.send_json(req, &redeem)
    }
    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }
    /// Ends the session.
    ///
    /// Tokens are not revoked on the server.
    pub fn logout(self) {}
}
