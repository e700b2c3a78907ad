// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::GenerationOptions;

// Configuration for the credential tooling
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationOptions::default();
        Self {
            // Password Generation
            default_password_length: generation.length,
            default_include_uppercase: generation.include_uppercase,
            default_include_lowercase: generation.include_lowercase,
            default_include_numbers: generation.include_numbers,
            default_include_symbols: generation.include_symbols,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_UPPERCASE") {
            if let Ok(include) = val.parse() {
                config.default_include_uppercase = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_LOWERCASE") {
            if let Ok(include) = val.parse() {
                config.default_include_lowercase = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_NUMBERS") {
            if let Ok(include) = val.parse() {
                config.default_include_numbers = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_SYMBOLS") {
            if let Ok(include) = val.parse() {
                config.default_include_symbols = include;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    /// Generation options seeded from the configured defaults.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}
