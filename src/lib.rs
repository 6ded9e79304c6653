pub mod application;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod render;

pub use application::checkout::{CheckoutService, SubmissionStatus};
pub use domain::cart::Cart;
pub use domain::menu::MenuItem;
pub use domain::ports::OrderApi;
pub use errors::ApiError;
pub use infrastructure::http_api::HttpOrderApi;
