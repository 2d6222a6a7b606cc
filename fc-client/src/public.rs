use std::sync::Arc;

use reqwest::blocking::Client;

use fc_boundary::{
    Ack, Credentials, NewUser, Restaurant, RestaurantWithReviews, Review, Token,
};

use crate::{into_json, Locator, NoLocation, Result, UserApi};

/// Public Foodie's Circle API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
    client: Client,
    locator: Arc<dyn Locator>,
}

impl PublicApi {
    /// Creates a client without location services.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self::with_locator(url, Arc::new(NoLocation))
    }

    #[must_use]
    pub fn with_locator(url: String, locator: Arc<dyn Locator>) -> Self {
        Self {
            url,
            client: Client::new(),
            locator,
        }
    }

    pub fn register_foodie(&self, new_user: &NewUser) -> Result<()> {
        self.register("foodie", new_user)
    }

    pub fn register_restaurant(&self, new_user: &NewUser) -> Result<()> {
        self.register("restaurant", new_user)
    }

    fn register(&self, kind: &str, new_user: &NewUser) -> Result<()> {
        let url = format!("{}/auth/register/{kind}", self.url);
        let response = self.client.post(&url).json(new_user).send()?;
        let _: Ack = into_json(response)?;
        Ok(())
    }

    pub fn login(&self, credentials: &Credentials) -> Result<UserApi> {
        let url = format!("{}/auth/login", self.url);
        let response = self.client.post(&url).json(credentials).send()?;
        let token: Token = into_json(response)?;
        Ok(UserApi::new(self.url.clone(), self.client.clone(), token))
    }

    pub fn nearby_restaurants(&self, lat: f64, lon: f64) -> Result<Vec<Restaurant>> {
        let url = format!("{}/restaurants/nearby", self.url);
        let response = self
            .client
            .get(&url)
            .query(&[("lat", lat), ("lon", lon)])
            .send()?;
        into_json(response)
    }

    /// Lists the restaurants around the current position.
    ///
    /// Nothing is found without a known position.
    pub fn restaurants_around_me(&self) -> Result<Vec<Restaurant>> {
        match self.locator.current_position() {
            Some(pos) => self.nearby_restaurants(pos.lat, pos.lon),
            None => Ok(vec![]),
        }
    }

    pub fn restaurant(&self, id: &str) -> Result<RestaurantWithReviews> {
        let url = format!("{}/restaurants/{id}", self.url);
        let response = self.client.get(&url).send()?;
        into_json(response)
    }

    pub fn recent_reviews(&self) -> Result<Vec<Review>> {
        let url = format!("{}/reviews/recent", self.url);
        let response = self.client.get(&url).send()?;
        into_json(response)
    }

    pub fn version(&self) -> Result<String> {
        let url = format!("{}/server/version", self.url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
