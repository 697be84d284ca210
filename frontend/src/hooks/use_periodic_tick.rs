use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for a fixed-cadence tick
#[derive(Clone, PartialEq)]
pub struct PeriodicTickConfig {
    pub interval_ms: u32,
    /// Emit one tick right away at mount, before the interval starts
    pub fire_immediately: bool,
}

impl Default for PeriodicTickConfig {
    fn default() -> Self {
        Self {
            interval_ms: 60_000, // once a minute
            fire_immediately: false,
        }
    }
}

impl PeriodicTickConfig {
    /// Once a minute with an immediate first tick (availability cadence).
    pub fn minutely() -> Self {
        Self {
            interval_ms: 60_000,
            fire_immediately: true,
        }
    }

    /// Fixed interval, first tick only after it elapses.
    pub fn every_ms(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            fire_immediately: false,
        }
    }
}

/// Hook driving `on_tick` on a fixed cadence for the caller's mounted lifetime.
///
/// The interval handle lives inside the mount effect and is dropped by the
/// cleanup closure, which cancels the underlying browser timer. A torn-down
/// surface can therefore never receive another tick.
///
/// `on_tick` is captured at mount; hand it something that stays valid across
/// renders, like a reducer dispatch.
#[hook]
pub fn use_periodic_tick(config: PeriodicTickConfig, on_tick: Callback<()>) {
    use_effect_with(config, move |config| {
        if config.fire_immediately {
            on_tick.emit(());
        }

        let tick = on_tick.clone();
        let interval = Interval::new(config.interval_ms, move || tick.emit(()));
        Logger::debug_with_component(
            "periodic-tick",
            &format!("started {}ms interval", config.interval_ms),
        );

        move || {
            drop(interval);
            Logger::debug_with_component("periodic-tick", "interval cancelled");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_minutely_config() {
        let config = PeriodicTickConfig::minutely();
        assert_eq!(config.interval_ms, 60_000);
        assert!(config.fire_immediately);
    }

    #[wasm_bindgen_test]
    fn test_every_ms_config() {
        let config = PeriodicTickConfig::every_ms(30_000);
        assert_eq!(config.interval_ms, 30_000);
        assert!(!config.fire_immediately);
    }

    #[wasm_bindgen_test]
    fn test_default_config_is_one_minute() {
        let config = PeriodicTickConfig::default();
        assert_eq!(config.interval_ms, 60_000);
        assert!(!config.fire_immediately);
    }
}
