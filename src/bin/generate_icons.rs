//! generate-icons: render the microphone launcher icon for every Android
//! density and write the mipmap set.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tts_voice_tools::config::Config;
use tts_voice_tools::icon::batch;
use tts_voice_tools::icon::sink::MipmapSink;

#[derive(Parser, Debug)]
#[command(name = "generate-icons", about = "Generate Android launcher icons")]
struct Args {
    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Android `res` directory to write mipmap-* folders into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(args.config.as_deref());
    let res_dir = args.output.unwrap_or(config.icons.output_dir);

    let mut sink = MipmapSink::new(&res_dir);
    let report = batch::generate(&config.icons.densities, &config.icons.palette, &mut sink)?;

    info!(
        "All icons generated: {} files in {} directories under {}",
        report.file_count(),
        report.saved.len(),
        res_dir.display()
    );
    info!("Now rebuild the APK: cd android && ./gradlew assembleDebug");

    Ok(())
}
