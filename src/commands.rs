//! Client commands and their user-facing output.
//!
//! Network failures end here: each one is written out as a diagnostic and
//! the command still returns `Ok`. Only a failing writer is an error.

use std::io::{self, Write};

use tracing::debug;

use crate::client::{rate_in_range, ClientError, SpeakRequest, TtsClient, DEFAULT_RATE};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Speak { text: String, speed: f32, pitch: f32 },
    Status,
    Health,
}

pub async fn execute<W: Write>(client: &TtsClient, command: &Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Speak { text, speed, pitch } => speak(client, text, *speed, *pitch, out).await,
        Command::Status => status(client, out).await,
        Command::Health => health(client, out).await,
    }
}

/// Diagnostics shared by every command for transport-level failures.
fn write_transport_failure<W: Write>(
    client: &TtsClient,
    err: &ClientError,
    context: &str,
    out: &mut W,
) -> io::Result<()> {
    debug!("{context}: {err:?}");
    match err {
        ClientError::Connect { url, .. } => {
            writeln!(out, "Connection Error: Cannot reach {url}")?;
            writeln!(out, "   Make sure:")?;
            writeln!(out, "   1. Service is running on the Android device")?;
            writeln!(out, "   2. Both devices are on the same Wi-Fi network")?;
            writeln!(out, "   3. Device address ({}) is correct", client.base_url())
        }
        ClientError::Timeout => writeln!(out, "Timeout: Service didn't respond in time"),
        other => writeln!(out, "{context}: {other}"),
    }
}

fn warn_if_clamped<W: Write>(name: &str, value: f32, out: &mut W) -> io::Result<()> {
    if !rate_in_range(value) {
        writeln!(out, "Warning: {name} {value:?} out of range (0.5-2.0), clamping...")?;
    }
    Ok(())
}

async fn speak<W: Write>(
    client: &TtsClient,
    text: &str,
    speed: f32,
    pitch: f32,
    out: &mut W,
) -> io::Result<()> {
    warn_if_clamped("Speed", speed, out)?;
    warn_if_clamped("Pitch", pitch, out)?;
    let request = SpeakRequest::new(text, speed, pitch);

    writeln!(out, "Sending: {}", request.text)?;
    if request.speed != DEFAULT_RATE || request.pitch != DEFAULT_RATE {
        writeln!(out, "   Speed: {:?}x, Pitch: {:?}", request.speed, request.pitch)?;
    }

    match client.speak(&request).await {
        Ok(resp) => {
            writeln!(out, "Success!")?;
            writeln!(out, "   Status: {}", resp.status)?;
            writeln!(out, "   Speed: {}x", resp.speed)?;
            writeln!(out, "   Pitch: {}", resp.pitch)?;
            writeln!(out, "   Queue Size: {}", resp.queue_size)?;
            writeln!(out, "   Message: {}", resp.message)
        }
        Err(ClientError::Api { status, error }) => {
            debug!("Device rejected speak request with HTTP {status}");
            match error {
                Some(error) => writeln!(out, "Error: {error}"),
                None => writeln!(out, "Error: HTTP {status}"),
            }
        }
        Err(err) => write_transport_failure(client, &err, "Error", out),
    }
}

async fn status<W: Write>(client: &TtsClient, out: &mut W) -> io::Result<()> {
    match client.status().await {
        Ok(status) => {
            writeln!(out, "Service Status:")?;
            writeln!(out, "   Service: {}", status.service)?;
            writeln!(out, "   Port: {}", status.port)?;
            writeln!(out, "   TTS Initialized: {}", status.tts_initialized)?;
            writeln!(out, "   Currently Speaking: {}", status.is_speaking)?;
            writeln!(out, "   Queue Size: {}", status.queue_size)?;
            writeln!(out, "   Last Status: {}", status.last_status)
        }
        Err(ClientError::Api { status, .. }) => writeln!(out, "Status check failed: {status}"),
        Err(err) => write_transport_failure(client, &err, "Error getting status", out),
    }
}

async fn health<W: Write>(client: &TtsClient, out: &mut W) -> io::Result<()> {
    match client.health().await {
        Ok(_) => writeln!(out, "Service is healthy and responding"),
        Err(ClientError::Api { status, .. }) => writeln!(out, "Health check failed: {status}"),
        Err(err) => write_transport_failure(client, &err, "Health check error", out),
    }
}
