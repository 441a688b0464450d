//! quadrille demo: a textured quad steered from the keyboard.

mod variants;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use quadrille_engine::core::Scene;
use quadrille_engine::device::GpuInit;
use quadrille_engine::logging::{LoggingConfig, init_logging};
use quadrille_engine::window::{Runtime, RuntimeConfig};

use crate::variants::Variant;

/// Keyboard-driven affine transform playground.
#[derive(Parser, Debug)]
#[command(name = "quadrille", version, about = "Keyboard-driven affine transform playground")]
struct Cli {
    /// Scene preset to run
    #[arg(long, value_enum, default_value_t = Variant::Full)]
    variant: Variant,

    /// Image to texture the quad with; pale yellow placeholder otherwise
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 700.0)]
    height: f64,

    /// Print the variant's bindings and exit
    #[arg(long)]
    list_bindings: bool,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cli = Cli::parse();
    let mut scene = cli.variant.scene();
    if let Some(path) = cli.image {
        scene.texture.path = Some(path);
    }

    print_bindings(cli.variant, &scene);
    if cli.list_bindings {
        return Ok(());
    }

    let config = RuntimeConfig {
        title: format!("quadrille · {}", cli.variant),
        width: cli.width,
        height: cli.height,
    };

    Runtime::run(config, GpuInit::default(), scene)
}

/// Startup banner, printed before the window opens.
fn print_bindings(variant: Variant, scene: &Scene) {
    println!();
    println!("  quadrille · {variant}");
    println!();
    for binding in &scene.bindings {
        println!("    {:<26} {}", binding.label(), binding.chord());
    }
    println!();
    println!("    Held keys apply once per frame; Escape quits.");
    println!();
}
