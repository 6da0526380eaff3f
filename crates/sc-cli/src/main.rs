//! `sc-render`: runs a JSON draw script against a software canvas and
//! writes the result as a binary PPM image.
//!
//! Usage: `sc-render <script.json> [-o out.ppm]`. Verbosity follows
//! `RUST_LOG` (default `info`).

mod script;

use anyhow::{Context, bail};
use script::Script;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

const USAGE: &str = "usage: sc-render <script.json> [-o out.ppm]";

#[derive(Debug, PartialEq)]
struct Args {
    script: PathBuf,
    output: PathBuf,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut script = None;
    let mut output = PathBuf::from("out.ppm");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let path = args.next().context("missing value for --output")?;
                output = PathBuf::from(path);
            }
            "-h" | "--help" => bail!(USAGE),
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    Ok(Args {
        script: script.context(USAGE)?,
        output,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let script = Script::from_json(&text)
        .with_context(|| format!("parsing {}", args.script.display()))?;
    log::debug!(
        "loaded {} commands for a {}x{} canvas",
        script.commands.len(),
        script.width,
        script.height
    );

    let canvas = script.render();

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    canvas
        .write_ppm(BufWriter::new(file))
        .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        args.output.display()
    );
    Ok(())
}
