//! tts-voice-tools: companion tools for the TTS Voice Android service.
//!
//! - `icon`: renders the microphone launcher icon and writes the mipmap set
//! - `client`: typed HTTP client for the device's `/speak`, `/status`, `/health`
//! - `commands`: client commands with user-facing output
//! - `config`: YAML configuration shared by both binaries

pub mod client;
pub mod commands;
pub mod config;
pub mod icon;
