pub mod ga_config;
pub mod ga2d_config;
pub mod interval_config;
