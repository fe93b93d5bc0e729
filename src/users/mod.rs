pub mod dto;
pub mod error;
pub mod repo;
pub mod repo_types;
pub mod report;
pub mod seed;
pub mod services;
