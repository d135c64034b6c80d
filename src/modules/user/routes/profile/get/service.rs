use super::types::{request, response};

pub async fn service(payload: request::Payload) -> response::Response {
    Ok(response::Success::Profile((&payload.auth.user).into()))
}
