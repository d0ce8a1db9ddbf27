//! Clients for the external identity service.

pub mod grpc_token_validator;

pub use grpc_token_validator::GrpcTokenValidator;
