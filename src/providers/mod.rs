pub mod provider;
pub mod rest_provider;
