//! Transport metadata extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use std::net::{IpAddr, SocketAddr};

use nook_core::domain::ClientContext;

use crate::state::AppState;

/// Reported when the transport cannot tell who is connecting.
pub const UNKNOWN_ADDR: &str = "unknown";

/// Who sent the request, as observed by the server rather than claimed by
/// the payload.
///
/// The address is the socket peer unless [`AppState::trust_proxy`] is set,
/// in which case `Forwarded` / `X-Forwarded-For` take over.
///
/// ```ignore
/// async fn submit(Client(client): Client, body: web::Json<Req>) -> impl Responder {
///     format!("hello from {}", client.ip)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client(pub ClientContext);

impl Client {
    pub fn from_http(req: &HttpRequest) -> Self {
        let trust_proxy = req
            .app_data::<web::Data<AppState>>()
            .is_some_and(|state| state.trust_proxy);

        Self::observe(req, trust_proxy)
    }

    pub fn observe(req: &HttpRequest, trust_proxy: bool) -> Self {
        let info = req.connection_info();
        let reported = if trust_proxy {
            info.realip_remote_addr()
        } else {
            info.peer_addr()
        };
        let ip = reported
            .map(normalize_ip)
            .unwrap_or_else(|| UNKNOWN_ADDR.to_string());

        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Client(ClientContext { ip, user_agent })
    }
}

impl FromRequest for Client {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Client::from_http(req)))
    }
}

/// Reduce a reported address to a bare IP.
///
/// Strips `:port` and `[...]:port` forms and unwraps IPv4-mapped IPv6
/// addresses, so a dual-stack listener still reports `127.0.0.1`. Anything
/// that does not parse is kept as-is.
pub fn normalize_ip(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return addr.ip().to_canonical().to_string();
    }

    let bare = raw.trim_start_matches('[').trim_end_matches(']');
    match bare.parse::<IpAddr>() {
        Ok(ip) => ip.to_canonical().to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_normalize_ip() {
        assert_eq!(normalize_ip("127.0.0.1"), "127.0.0.1");
        assert_eq!(normalize_ip("127.0.0.1:53412"), "127.0.0.1");
        assert_eq!(normalize_ip("[::1]:8080"), "::1");
        assert_eq!(normalize_ip("::1"), "::1");
        assert_eq!(normalize_ip("::ffff:127.0.0.1"), "127.0.0.1");
        assert_eq!(normalize_ip("not-an-ip"), "not-an-ip");
    }

    #[test]
    fn test_reads_peer_and_user_agent() {
        let req = TestRequest::default()
            .peer_addr("203.0.113.9:4000".parse().unwrap())
            .insert_header((header::USER_AGENT, "Mozilla/5.0"))
            .to_http_request();

        let Client(client) = Client::observe(&req, false);
        assert_eq!(client.ip, "203.0.113.9");
        assert_eq!(client.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_forwarded_for_ignored_by_default() {
        let req = TestRequest::default()
            .peer_addr("203.0.113.5:4000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "127.0.0.1"))
            .to_http_request();

        let Client(client) = Client::observe(&req, false);
        assert_eq!(client.ip, "203.0.113.5");
        assert_eq!(client.user_agent, "");
    }

    #[test]
    fn test_forwarded_for_used_behind_trusted_proxy() {
        let req = TestRequest::default()
            .peer_addr("10.0.0.2:4000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "198.51.100.4"))
            .to_http_request();

        let Client(client) = Client::observe(&req, true);
        assert_eq!(client.ip, "198.51.100.4");
    }

    #[test]
    fn test_missing_peer_is_unknown() {
        let req = TestRequest::default().to_http_request();

        let Client(client) = Client::observe(&req, false);
        assert_eq!(client.ip, UNKNOWN_ADDR);
    }
}
