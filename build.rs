use std::env;

fn main() {
    // The Swift package is only compiled when the host opts into linking
    // the real framework; the default build routes everything through the
    // stub backend and needs no native toolchain.
    if env::var_os("CARGO_FEATURE_SWIFT_FRAMEWORK").is_some() {
        compile_swift_framework();
    }
}

fn compile_swift_framework() {
    use std::path::PathBuf;
    use std::process::Command;

    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let package_dir = manifest_dir.join("native/macos-sensing");

    let status = Command::new("swift")
        .args([
            "build",
            "-c",
            "release",
            "--package-path",
            package_dir.to_str().expect("package path invalid UTF-8"),
            "--product",
            "MacOSSensing",
        ])
        .status()
        .expect("Failed to spawn swift build");

    if !status.success() {
        panic!("Swift sensing framework build failed");
    }

    let build_output = package_dir.join(".build").join("release");
    println!(
        "cargo:rustc-link-search=native={}",
        build_output.to_str().expect("link path invalid UTF-8")
    );
    println!("cargo:rustc-link-lib=dylib=MacOSSensing");
    println!(
        "cargo:rustc-link-arg=-Wl,-rpath,{}",
        build_output.to_str().expect("link path invalid UTF-8")
    );

    println!(
        "cargo:rerun-if-changed={}",
        package_dir.join("Sources/MacOSSensing").to_str().unwrap()
    );
    println!(
        "cargo:rerun-if-changed={}",
        package_dir.join("Package.swift").to_str().unwrap()
    );
}
