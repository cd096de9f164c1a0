//! Browser entrypoint for the store console. Native builds list the console routes.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("console_site runs in the browser; build it for wasm32 with the `csr` feature.");
    for line in site::route_table() {
        println!("{line}");
    }
}
