use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

const DOCS_CSP: &str = "default-src 'self'; \
                        script-src 'self' 'unsafe-inline'; \
                        style-src 'self' 'unsafe-inline'; \
                        img-src 'self' data:; \
                        font-src 'self'; \
                        connect-src 'self'";

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

fn is_docs_path(path: &str) -> bool {
    path.starts_with("/docs")
        || path.starts_with("/api-docs")
        || path == "/.well-known/openapi.json"
}

fn apply(headers: &mut HeaderMap, docs: bool) {
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    // Swagger UI needs inline assets and same-origin framing.
    let (csp, frame) = if docs {
        (DOCS_CSP, "SAMEORIGIN")
    } else {
        (API_CSP, "DENY")
    };
    headers.insert(header::CONTENT_SECURITY_POLICY, HeaderValue::from_static(csp));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static(frame));
}

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let docs = is_docs_path(req.uri().path());

    let mut response = next.run(req).await;
    apply(response.headers_mut(), docs);

    response
}
