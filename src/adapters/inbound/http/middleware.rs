use http::{Method, header};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{HttpMakeClassifier, TraceLayer},
};

/// CORS policy for the JSON API: any origin, only the verbs the API uses
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}

/// Request/response tracing through the `tracing` subscriber
pub fn trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
