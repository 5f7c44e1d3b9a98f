pub mod fallback;
pub mod health;
pub mod index;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: [Endpoint; 2] = [
    Endpoint {
        path: index::PATH,
        method: "GET",
        description: "Service information",
    },
    Endpoint {
        path: health::PATH,
        method: "GET",
        description: "Health check",
    },
];
