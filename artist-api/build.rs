//! Build script for artist-api crate.

use std::{error::Error, path::PathBuf};

use prost_build::Config;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let fd_path = out_dir.join("artist_v1.bin");

    let root_path = PathBuf::from("./proto/v1");
    let proto_paths: Vec<_> = [
        "artist_resources.proto",
        "artist_service.proto",
        "errors/artist_error.proto",
    ]
    .into_iter()
    .map(|proto_path| root_path.join(proto_path))
    .collect();
    for proto_path in &proto_paths {
        println!("cargo:rerun-if-changed={}", proto_path.display());
    }

    let mut config = Config::default();
    config
        .protoc_executable(protoc_bin_vendored::protoc_bin_path()?)
        .file_descriptor_set_path(&fd_path)
        .enable_type_names()
        .type_name_domain([".artist"], "artist.setmaker.dev")
        .btree_map(["."]);

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .client_mod_attribute("artist.v1", r#"#[cfg(feature = "client")]"#)
        .server_mod_attribute("artist.v1", r#"#[cfg(feature = "server")]"#)
        .compile_with_config(
            config,
            &proto_paths,
            &[
                PathBuf::from("./proto"),
                protoc_bin_vendored::include_path()?,
            ],
        )?;

    Ok(())
}
