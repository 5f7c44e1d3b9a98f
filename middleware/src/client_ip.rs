use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Extensions, HeaderMap, Request, Response, header::FORWARDED, request::Parts},
    middleware::Next,
};
use forwarded_header_value::{ForwardedHeaderValue, Identifier};

const X_FORWARDED_FOR: &str = "x-forwarded-for";

pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    let ip = client_ip(request.headers(), request.extensions());
    request.extensions_mut().insert(ip);
    next.run(request).await
}

/// The address of the client that originated the request, as resolved by
/// [`mw_client_ip`]. Resolves on the spot when the middleware is not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ip = match parts.extensions.get::<Option<IpAddr>>() {
            Some(ip) => *ip,
            None => client_ip(&parts.headers, &parts.extensions),
        };
        Ok(Self(ip))
    }
}

fn client_ip(headers: &HeaderMap, extensions: &Extensions) -> Option<IpAddr> {
    headers
        .get(FORWARDED)
        .and_then(|val| val.to_str().ok())
        .and_then(|val| ForwardedHeaderValue::from_str(val).ok())
        .map(|forwarded| forwarded.into_remotest())
        .and_then(|stanza| stanza.forwarded_for)
        .and_then(|identifier| match identifier {
            Identifier::SocketAddr(socket_addr) => Some(socket_addr.ip()),
            Identifier::IpAddr(ip_addr) => Some(ip_addr),
            _ => None,
        })
        .or_else(|| {
            headers
                .get(X_FORWARDED_FOR)
                .and_then(|val| val.to_str().ok())
                .and_then(|val| val.split(',').next())
                .and_then(|first| first.trim().parse::<IpAddr>().ok())
        })
        .or_else(|| {
            extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|connect_info| connect_info.0.ip())
        })
}
