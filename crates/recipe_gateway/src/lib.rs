//! Recipe gateway: HTTP access to the recipe API and background execution of
//! the core's effects.
mod gateway;
mod handle;
mod types;

pub use gateway::{GatewaySettings, RecipeGateway, ReqwestGateway, DEFAULT_BASE_URL};
pub use handle::GatewayHandle;
pub use types::{FailureKind, GatewayError, GatewayEvent};
