use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{options, Request, Response};

const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// Allows every origin, method and header.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let headers = request.headers();

        match headers.get_one("Origin") {
            Some(origin) => {
                response.set_header(Header::new("Access-Control-Allow-Origin", origin.to_owned()));
                response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
                response.set_header(Header::new("Vary", "Origin"));
            }
            None => {
                response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
            }
        }

        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        let allowed_headers = headers
            .get_one("Access-Control-Request-Headers")
            .unwrap_or("*")
            .to_owned();
        response.set_header(Header::new("Access-Control-Allow-Headers", allowed_headers));
    }
}

/// Answers CORS preflight requests for any path.
#[options("/<_..>")]
pub fn preflight() {}
