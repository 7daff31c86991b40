use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;
use serde_json::Value;

pub const INVALID_INPUT: &str = "Invalid role or movieId";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CrewMembers {
    crew_members: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

pub fn crew_members(records: Vec<Value>) -> Result<Response<Body>, Error> {
    json_response(StatusCode::OK, &CrewMembers { crew_members: records })
}

pub fn invalid_input() -> Result<Response<Body>, Error> {
    json_response(StatusCode::BAD_REQUEST, &Message { message: INVALID_INPUT })
}

pub fn internal_error() -> Result<Response<Body>, Error> {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &Message {
            message: INTERNAL_ERROR,
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))
        .map_err(Box::new)?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text.as_str(),
            _ => panic!("invalid body"),
        }
    }

    #[test]
    fn fixed_shapes() {
        let ok = crew_members(vec![json!({ "movieId": 100 })]).unwrap();
        assert_eq!(ok.status(), 200);
        assert_eq!(body_text(&ok), r#"{"crewMembers":[{"movieId":100}]}"#);

        let bad = invalid_input().unwrap();
        assert_eq!(bad.status(), 400);
        assert_eq!(body_text(&bad), r#"{"message":"Invalid role or movieId"}"#);

        let err = internal_error().unwrap();
        assert_eq!(err.status(), 500);
        assert_eq!(body_text(&err), r#"{"message":"Internal Server Error"}"#);
    }
}
