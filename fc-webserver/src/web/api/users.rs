use super::*;

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::Token> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            log::debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    let token = jwt_state.generate_token(&user.id)?;
    Ok(Json(json::Token { token }))
}

#[post("/auth/register/foodie", format = "application/json", data = "<new_user>")]
pub fn post_register_foodie(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::Ack> {
    let new_user = from_json::new_user(new_user?.into_inner());
    flows::register_foodie(&connections, &*notify.0, new_user)?;
    Ok(Json(json::Ack::OK))
}

#[post(
    "/auth/register/restaurant",
    format = "application/json",
    data = "<new_user>"
)]
pub fn post_register_restaurant(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::Ack> {
    let new_user = from_json::new_user(new_user?.into_inner());
    flows::register_restaurant_owner(&connections, &*notify.0, new_user)?;
    Ok(Json(json::Ack::OK))
}

#[get("/users/me")]
pub fn get_current_user(db: sqlite::Connections, auth: Auth) -> Result<json::User> {
    let user = auth.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[post("/users/<id>/follow")]
pub fn post_follow_user(
    connections: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::Ack> {
    let follower = auth.user(&connections.shared()?)?;
    flows::follow_user(&connections, &follower, &Id::from(id))?;
    Ok(Json(json::Ack::OK))
}
