use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        // v7 so request ids sort by arrival time in log queries.
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// `x-request-id` layer. Apply with `.layer(request_id_layer())` in router.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::x_request_id(MakeUuidRequestId)
}
