//! CLI logic for the Keygrid keyboard diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{
    fmt::Write as _,
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use log::info;

use keygrid::{KeygridError, LayoutBuilder, keymap::Keymap};

/// Default output path when neither the command line nor the
/// configuration names one.
const DEFAULT_OUTPUT: &str = "out.svg";

/// Run the Keygrid CLI application
///
/// This function parses the keymaps drawn in the input file and either
/// writes an SVG preview to the output file or, with `--list`, prints them.
///
/// Paths given on the command line take precedence over `source.path` and
/// `render.image` from the configuration.
///
/// # Errors
///
/// Returns `KeygridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Sources without any keymap
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), KeygridError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let input = resolve_input(args, app_config.source().path())?;
    let output = resolve_output(args, app_config.render().image());
    info!(
        input_path = input.display().to_string(),
        output_path = output.display().to_string();
        "Processing keymap source"
    );

    let reader = BufReader::new(File::open(&input)?);

    let builder = LayoutBuilder::new(app_config);
    let keymaps = builder.parse_reader(reader)?;

    if args.list {
        print!("{}", format_listing(&keymaps));
        return Ok(());
    }

    let svg = builder.render_svg(&keymaps)?;
    fs::write(&output, svg)?;

    info!(output_file = output.display().to_string(); "SVG exported successfully");

    Ok(())
}

fn resolve_input(args: &Args, configured: Option<&Path>) -> Result<PathBuf, KeygridError> {
    args.input
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
        .ok_or_else(|| {
            KeygridError::Config(
                "no input file: pass one on the command line or set `source.path`".to_string(),
            )
        })
}

fn resolve_output(args: &Args, configured: Option<&Path>) -> PathBuf {
    args.output
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

/// Formats keymaps as a plain-text listing.
///
/// Each keymap is a `<title>: <n> keys` line followed by one indented line
/// per key giving its grid position, span and quoted label.
pub fn format_listing(keymaps: &[Keymap]) -> String {
    let mut out = String::new();
    for keymap in keymaps {
        writeln!(out, "{}: {} keys", keymap.title(), keymap.len())
            .expect("Writing to String buffer is infallible");
        for key in keymap.keys() {
            writeln!(
                out,
                "  ({}, {}) {}×{} {:?}",
                key.x(),
                key.y(),
                key.dx(),
                key.dy(),
                key.label()
            )
            .expect("Writing to String buffer is infallible");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use keygrid::keymap::Key;

    use super::*;

    #[test]
    fn test_format_listing() {
        let keymaps = [
            Keymap::new(
                "Base",
                vec![Key::new(3, 0, 7, 2, "Esc"), Key::new(10, 0, 7, 2, "")],
            ),
            Keymap::new("Fn", vec![Key::new(3, 0, 14, 2, "F\"1")]),
        ];

        let expected = "\
Base: 2 keys
  (3, 0) 7×2 \"Esc\"
  (10, 0) 7×2 \"\"
Fn: 1 keys
  (3, 0) 14×2 \"F\\\"1\"
";
        assert_eq!(format_listing(&keymaps), expected);
    }

    fn args(input: Option<&str>, output: Option<&str>) -> Args {
        Args {
            input: input.map(str::to_string),
            output: output.map(str::to_string),
            config: None,
            log_level: "off".to_string(),
            list: false,
        }
    }

    #[test]
    fn test_command_line_paths_win() {
        let args = args(Some("cli.c"), Some("cli.svg"));
        let input = resolve_input(&args, Some(Path::new("cfg/keymap.c"))).expect("input");
        let output = resolve_output(&args, Some(Path::new("cfg/out.svg")));
        assert_eq!(input, PathBuf::from("cli.c"));
        assert_eq!(output, PathBuf::from("cli.svg"));
    }

    #[test]
    fn test_configured_paths_fill_in() {
        let args = args(None, None);
        let input = resolve_input(&args, Some(Path::new("cfg/keymap.c"))).expect("input");
        let output = resolve_output(&args, Some(Path::new("cfg/out.svg")));
        assert_eq!(input, PathBuf::from("cfg/keymap.c"));
        assert_eq!(output, PathBuf::from("cfg/out.svg"));
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let args = args(None, None);
        let err = resolve_input(&args, None).unwrap_err();
        assert!(matches!(err, KeygridError::Config(ref m) if m.contains("source.path")));
        assert_eq!(resolve_output(&args, None), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_format_listing_empty() {
        assert_eq!(format_listing(&[]), "");
    }
}
