//! QueueClip - Configuration module

pub mod settings;

pub use settings::{
    get_settings, init_settings, update_settings, IndicatorPosition, PasteMode, Settings,
    SettingsError,
};
