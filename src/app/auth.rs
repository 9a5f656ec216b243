use crate::api::ApiClient;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, NavElement, Navigator, SessionStore};
use crate::model::structs::{AuthResponse, User, MENTOR_GROUP};
use serde_json::Value;

use super::ui::NavBindings;

/// Login state as derived from the session store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated { username: String, mentor: bool },
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated { .. })
    }
}

/// Stored user record. An absent entry is `Null`; malformed JSON is an error.
fn stored_user<S: SessionStore>(store: &S) -> Result<Value> {
    match store.user()? {
        Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Value::Null),
    }
}

fn stored_token<S: SessionStore>(store: &S) -> Result<Option<String>> {
    Ok(store.token()?.filter(|token| !token.is_empty()))
}

fn has_role(user: &Value, role: &str) -> bool {
    user["groups"]
        .as_array()
        .is_some_and(|groups| groups.iter().any(|group| group.as_str() == Some(role)))
}

fn display_name(user: &Value) -> String {
    match &user["username"] {
        Value::String(name) => name.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Read the session and update the navigation elements accordingly.
pub fn check_auth_status<S, E>(store: &S, nav: &NavBindings<E>) -> Result<AuthStatus>
where
    S: SessionStore,
    E: NavElement,
{
    let token = stored_token(store)?;
    let user = stored_user(store)?;

    let status = match token {
        Some(_) if !user.is_null() => AuthStatus::Authenticated {
            username: display_name(&user),
            mentor: has_role(&user, MENTOR_GROUP),
        },
        _ => AuthStatus::Anonymous,
    };

    nav.render(&status);
    Ok(status)
}

/// Log in and persist token + user together.
pub async fn login<C, S, N>(
    api: &ApiClient<C, S, N>,
    username: &str,
    password: &str,
) -> Result<AuthResponse>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    let resp = api.login_user(username, password).await?;
    let auth = establish_session(api, resp)?;
    log::info!("User logged in: {username}");
    Ok(auth)
}

/// Register and persist the returned session.
pub async fn signup<C, S, N>(
    api: &ApiClient<C, S, N>,
    username: &str,
    email: &str,
    password: &str,
    password2: &str,
) -> Result<AuthResponse>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    let resp = api.signup_user(username, email, password, password2).await?;
    let auth = establish_session(api, resp)?;
    log::info!("New user registered: {username}");
    Ok(auth)
}

fn establish_session<C, S, N>(api: &ApiClient<C, S, N>, resp: Option<Value>) -> Result<AuthResponse>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    let resp =
        resp.ok_or_else(|| ErrorKind::ParseError("Empty authentication response".to_string()))?;
    let auth: AuthResponse = serde_json::from_value(resp)?;
    api.store()
        .set(&auth.token, &serde_json::to_string(&auth.user)?)?;
    Ok(auth)
}

/// Best-effort remote logout, guaranteed local teardown, then go home.
pub async fn logout<C, S, N>(api: &ApiClient<C, S, N>) -> Result<()>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    if let Err(e) = api.logout_user().await {
        log::info!("Logout API call failed, clearing local session anyway: {e}");
    }

    let cleared = api.store().clear();
    api.navigator().redirect(api.home_path());
    cleared
}

/// Redirect to the login view when no token is stored.
///
/// Only checks presence; the token is not validated against the server.
/// Returns whether the visitor may stay.
pub fn require_auth<C, S, N>(api: &ApiClient<C, S, N>) -> Result<bool>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    if stored_token(api.store())?.is_none() {
        api.navigator().redirect(api.login_path());
        return Ok(false);
    }
    Ok(true)
}

/// Like `require_auth`, and additionally sends non-mentors home.
pub fn require_mentor<C, S, N>(api: &ApiClient<C, S, N>) -> Result<bool>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    if !require_auth(api)? {
        return Ok(false);
    }
    if !has_role(&stored_user(api.store())?, MENTOR_GROUP) {
        api.navigator().redirect(api.home_path());
        return Ok(false);
    }
    Ok(true)
}

/// `GET /users/me/` as a typed record
pub async fn current_user<C, S, N>(api: &ApiClient<C, S, N>) -> Result<Option<User>>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    match api.get_current_user().await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
