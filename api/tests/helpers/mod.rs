
pub use app::make_test_app;
pub use request::{body_json, empty_request, json_request, multipart_request, xlsx};
