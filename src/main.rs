use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use camera_appicon::{APP_ICON_SLOTS, Generator};

#[derive(Debug, Parser)]
#[clap(
    name = "camera-appicon",
    about = "Generate the camera app icon set for iOS asset catalogs"
)]
struct Args {
    /// Output directory for the generated icon set.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value = Generator::DEFAULT_OUT_DIR
    )]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let generator = Generator::new(&args.output);

    generator.ensure_out_dir()?;
    for slot in &APP_ICON_SLOTS {
        let path = generator.write_slot(slot)?;
        let px = slot.pixels();
        println!("wrote {} ({px}x{px})", path.display());
    }
    let manifest = generator.write_manifest()?;
    println!("wrote {}", manifest.display());

    println!();
    println!(
        "Icon set complete. Add {} to the Xcode asset catalog.",
        args.output.display()
    );
    Ok(())
}
