use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tile_contour::{
    ContourSet, DegeneratePolicy, OutlineConfig, TileOrder, build_contours_from_codes,
};
use tile_core::Point;
use tile_io::{load_tiles, write_contours};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tile_outline")]
#[command(about = "Trace the outline contours of a tile layout")]
struct Cli {
    /// Tile layout JSON: an array of {"pos": {"x", "y"}, "type"} records
    #[arg(default_value = "test1.json")]
    input: PathBuf,

    /// Output JSON path (default: <input stem>_results.<ext> next to input)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fail instead of skipping groups whose outline is not a single loop
    #[arg(long)]
    strict: bool,

    /// Visit tiles in file order rather than sorted by position
    #[arg(long)]
    input_order: bool,

    /// Print each contour to stdout
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    init_tracing();
    run(&Cli::parse())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let out = cli.out.clone().unwrap_or_else(|| results_path(&cli.input));

    let records = load_tiles(&cli.input)
        .with_context(|| format!("loading tiles from {}", cli.input.display()))?;
    let records: Vec<(Point, i64)> = records.iter().map(|r| (r.position(), r.code)).collect();

    let cfg = outline_config(cli);
    let set = build_contours_from_codes(&records, &cfg)
        .with_context(|| format!("outlining tiles from {}", cli.input.display()))?;

    report(&set);
    if cli.print {
        print_contours(&set);
    }

    write_contours(&out, &set.contours)
        .with_context(|| format!("writing contours to {}", out.display()))?;

    tracing::info!(
        tiles = records.len(),
        contours = set.contours.len(),
        out = %out.display(),
        "outline complete"
    );
    Ok(())
}

fn outline_config(cli: &Cli) -> OutlineConfig {
    OutlineConfig {
        order: if cli.input_order {
            TileOrder::Input
        } else {
            TileOrder::ReadingOrder
        },
        degenerate: if cli.strict {
            DegeneratePolicy::Abort
        } else {
            DegeneratePolicy::Report
        },
    }
}

/// `dir/layout.json` -> `dir/layout_results.json`.
fn results_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "json".to_owned());

    input.with_file_name(format!("{stem}_results.{ext}"))
}

fn report(set: &ContourSet) {
    for d in &set.defects {
        tracing::warn!(
            group = d.group,
            tiles = ?d.tiles,
            "group left out of the output: {}",
            d.defect
        );
    }
}

fn print_contours(set: &ContourSet) {
    println!("path results");
    for (i, c) in set.iter_contours().enumerate() {
        println!("path {i} ({} tiles, perimeter {})", c.tiles.len(), c.perimeter());
        for p in &c.points {
            println!("({}, {})", p.x, p.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use super::{Cli, results_path, run};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tile_outline").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn results_path_keeps_directory_and_extension() {
        assert_eq!(
            results_path(Path::new("maps/level1.JSON")),
            PathBuf::from("maps/level1_results.JSON")
        );
        assert_eq!(
            results_path(Path::new("layout")),
            PathBuf::from("layout_results.json")
        );
    }

    #[test]
    fn defaults_read_test1_json() {
        let cli = cli(&[]);
        assert_eq!(cli.input, PathBuf::from("test1.json"));
        assert!(cli.out.is_none());
        assert!(!cli.strict);
    }

    #[test]
    fn run_writes_results_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("layout.json");
        fs::write(
            &input,
            r#"[{"pos": {"x": 0, "y": 0}, "type": 0}, {"pos": {"x": 1, "y": 0}, "type": 0}]"#,
        )
        .unwrap();

        run(&cli(&[input.to_str().unwrap()])).expect("run succeeds");

        let written = fs::read_to_string(dir.path().join("layout_results.json")).unwrap();
        let contours: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(contours.as_array().map(Vec::len), Some(1));
        assert_eq!(contours[0].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn unsupported_type_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("layout.json");
        fs::write(&input, r#"[{"pos": {"x": 0, "y": 0}, "type": 7}]"#).unwrap();

        let err = run(&cli(&[input.to_str().unwrap()])).unwrap_err();

        assert!(format!("{err:#}").contains("unsupported tile type 7"));
        assert!(!dir.path().join("layout_results.json").exists());
    }

    #[test]
    fn strict_mode_rejects_holes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ring.json");
        let mut records = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (1, 1) {
                    records.push(format!(r#"{{"pos": {{"x": {x}, "y": {y}}}, "type": 0}}"#));
                }
            }
        }
        fs::write(&input, format!("[{}]", records.join(","))).unwrap();
        let out = dir.path().join("out.json");

        let err = run(&cli(&[
            input.to_str().unwrap(),
            "--strict",
            "--out",
            out.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(format!("{err:#}").contains("degenerate topology"));
        assert!(!out.exists());

        run(&cli(&[input.to_str().unwrap(), "--out", out.to_str().unwrap()]))
            .expect("lenient run skips the ring");
        assert_eq!(fs::read_to_string(&out).unwrap(), "[]");
    }
}
