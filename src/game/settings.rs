/// Environment-driven knobs. The engine has no persisted configuration;
/// reproducing a board is done by passing its recorded seed back to the
/// generator, and the SEED variable is the hook the hosting layer uses for
/// that.
pub struct Settings;

impl Settings {
    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}
