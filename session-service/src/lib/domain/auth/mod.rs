mod deadline;
pub mod errors;
pub mod models;
pub mod ports;
pub mod revocation;
pub mod service;
