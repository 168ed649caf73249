use crate::services::http::HttpPort;
use crate::services::view::ViewPort;

pub struct AppState {
    pub view: Box<dyn ViewPort>,
    pub http: Box<dyn HttpPort>,
}
