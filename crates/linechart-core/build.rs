// File: crates/linechart-core/build.rs
// Summary: Links the Windows system libraries the Skia raster backend pulls in (font manager registry lookups).

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW from Skia's DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
