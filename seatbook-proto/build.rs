fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the vendored protoc so builds don't depend on a system install.
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/booking/v1/booking.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/booking/v1/booking.proto");
    Ok(())
}
