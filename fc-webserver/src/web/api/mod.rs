use std::{fmt::Display, result};

use fc_boundary::{Error as JsonErrorResponse, ErrorKind};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Catcher, Request, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite, Cfg},
};
use fc_application::prelude as flows;
use fc_core::{entities::*, usecases};

mod error;
mod promotions;
mod restaurants;
mod reviews;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_register_foodie,
        users::post_register_restaurant,
        users::get_current_user,
        users::post_follow_user,
        // ---   restaurants   --- //
        restaurants::get_nearby_restaurants,
        restaurants::get_restaurant,
        restaurants::post_review,
        // ---   reviews   --- //
        reviews::get_recent_reviews,
        // ---   promotions   --- //
        promotions::get_promotion_requests,
        promotions::post_approve_promotion,
        promotions::post_redeem_code,
        util::get_version,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> Json<JsonErrorResponse> {
    let kind = match status.code {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        400..=499 => ErrorKind::ValidationError,
        _ => ErrorKind::Internal,
    };
    Json(JsonErrorResponse {
        http_status: status.code,
        kind,
        message: status.reason_lossy().to_owned(),
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
    kind: ErrorKind,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        kind,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
