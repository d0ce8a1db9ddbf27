//! Generated protobuf types and gRPC stubs.

#![allow(clippy::all, clippy::pedantic)]

pub mod author {
    pub mod v1 {
        tonic::include_proto!("author.v1");
    }
}

pub mod token {
    pub mod v1 {
        tonic::include_proto!("token.v1");
    }
}
