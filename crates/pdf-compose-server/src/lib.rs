pub mod config;
pub mod errors;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
pub use store::ArtifactStore;
