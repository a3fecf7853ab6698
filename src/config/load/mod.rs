pub(crate) mod api_domain;
pub(crate) mod api_key;
pub(crate) mod api_port;
pub(crate) mod model_id;
