// File: crates/ratings-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's textlayout/ICU code calls into.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // ICU data lookup uses the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
