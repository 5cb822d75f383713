// File: crates/gapminder-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need (registry access).

fn main() {
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
