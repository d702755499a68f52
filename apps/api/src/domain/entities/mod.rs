pub mod credentials;
pub mod relay_result;
