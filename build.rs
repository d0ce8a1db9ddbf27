//! Build script compiling the author and token-validation protobuf definitions.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let proto_paths = [
        "proto/author/v1/author.proto",
        "proto/token/v1/token_validation.proto",
    ];
    for proto_path in &proto_paths {
        println!("cargo:rerun-if-changed={proto_path}");
    }

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&proto_paths, &["proto"])?;

    Ok(())
}
