pub mod asset;
pub mod denom;
pub mod error;
pub mod math;
pub mod tax;

#[cfg(not(target_arch = "wasm32"))]
pub mod testing;
