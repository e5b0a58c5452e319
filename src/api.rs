use gloo_net::http::{Request, Response};
use gloo_net::Error;

use crate::types::{NewUserDraft, User};

pub fn users_url(base: &str, backend: &str) -> String {
    format!("{base}/api/{backend}/users")
}

pub fn user_url(base: &str, backend: &str, id: i64) -> String {
    format!("{base}/api/{backend}/users/{id}")
}

// gloo-net resolves non-2xx responses as Ok, so status checks happen here.
fn ensure_ok(response: Response) -> Result<Response, Error> {
    if response.ok() {
        Ok(response)
    } else {
        Err(Error::GlooError(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )))
    }
}

/// GET the full collection, in the backend's storage order.
pub async fn fetch_users(base: &str, backend: &str) -> Result<Vec<User>, Error> {
    let response = Request::get(&users_url(base, backend)).send().await?;
    ensure_ok(response)?.json().await
}

/// POST the creation draft; the backend responds with the stored record,
/// id included.
pub async fn create_user(base: &str, backend: &str, draft: &NewUserDraft) -> Result<User, Error> {
    let response = Request::post(&users_url(base, backend))
        .json(draft)?
        .send()
        .await?;
    ensure_ok(response)?.json().await
}

/// PUT new name/email for `id`. The response body is unused.
pub async fn update_user(
    base: &str,
    backend: &str,
    id: i64,
    name: &str,
    email: &str,
) -> Result<(), Error> {
    let response = Request::put(&user_url(base, backend, id))
        .json(&serde_json::json!({ "name": name, "email": email }))?
        .send()
        .await?;
    ensure_ok(response)?;
    Ok(())
}

pub async fn delete_user(base: &str, backend: &str, id: i64) -> Result<(), Error> {
    let response = Request::delete(&user_url(base, backend, id)).send().await?;
    ensure_ok(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_nests_under_the_backend_segment() {
        assert_eq!(
            users_url("http://localhost:4000", "flask"),
            "http://localhost:4000/api/flask/users"
        );
    }

    #[test]
    fn member_url_appends_the_id() {
        assert_eq!(
            user_url("http://localhost:4000", "rust", 7),
            "http://localhost:4000/api/rust/users/7"
        );
    }
}
