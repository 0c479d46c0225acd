//! Application constants

/// Element `index.html` shows until the wasm bundle has mounted.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

// Query parameters read by `DashboardConfig`
pub const PARAM_WALLET: &str = "wallet";
pub const PARAM_PROVIDER: &str = "provider";
pub const PARAM_COLLECTION: &str = "collection";

// Starfield background
pub const STARFIELD_ELEMENT_ID: &str = "starfield";
pub const STARFIELD_STAR_COUNT: usize = 150;
pub const STARFIELD_MOUNT_DELAY_MS: u32 = 100;
