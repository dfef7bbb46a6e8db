//! Subcommand handlers.

use std::path::{Path, PathBuf};

use super::args::{Args, Command, ConfigAction, ImageArgs, TextArgs};
use crate::ascii::{quantize, CharSet};
use crate::banner;
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG_TOML};
use crate::decode;
use crate::figlet::{self, FontRegistry};
use crate::Error;

/// Dispatch a parsed command line.
pub fn run(args: Args) -> Result<(), Error> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Image(image_args) => {
            let cfg = Config::load(config_path)?;
            let out = render_image(&cfg, &image_args)?;
            let target = image_args.output.or_else(|| cfg.banner.output.clone());
            emit(&out, target.as_deref())
        }
        Command::Text(text_args) => {
            let cfg = Config::load(config_path)?;
            let out = render_text(&cfg, &text_args)?;
            let target = text_args.output.or_else(|| cfg.banner.output.clone());
            emit(&out, target.as_deref())
        }
        Command::Charsets => {
            list_charsets();
            Ok(())
        }
        Command::Fonts { font_dir } => {
            let cfg = Config::load(config_path)?;
            list_fonts(&font_dir.unwrap_or_else(|| cfg.font_dir()))
        }
        Command::Config { action } => handle_config_action(action, config_path),
    }
}

/// Convert an image to banner text using config values overridden by flags.
pub fn render_image(cfg: &Config, args: &ImageArgs) -> Result<String, Error> {
    let mut options = cfg.base_render_options();
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(contrast) = args.contrast {
        options.contrast = contrast;
    }
    if let Some(brightness) = args.brightness {
        options.brightness = f64::from(brightness);
    }
    if args.invert {
        options.inverted = true;
    }
    if let Some(ramp) = &args.ramp {
        options = options.with_ramp(ramp);
    } else if let Some(charset) = args.charset {
        options = options.with_charset(charset.into());
    } else {
        options = cfg.apply_ramp(options)?;
    }
    // Fail on bad settings before touching the file.
    options.validate()?;

    let image = decode::open(&args.path)?;
    let grid = quantize(&image, &options)?;
    log::info!(
        "Rendered {} as {}x{} characters",
        args.path.display(),
        grid.width(),
        grid.height()
    );

    let slogan = args.slogan.as_deref().or(cfg.banner.slogan.as_deref());
    Ok(banner::compose(&grid.to_text(), slogan, grid.width()))
}

/// Render text with a FIGlet font.
pub fn render_text(cfg: &Config, args: &TextArgs) -> Result<String, Error> {
    if args.text.trim().is_empty() {
        return Err(Error::Usage("Text to render must not be empty".to_string()));
    }

    let local;
    let registry = match args.font_dir.clone().or_else(|| cfg.fonts.dir.clone()) {
        Some(dir) => {
            local = FontRegistry::new(dir);
            &local
        }
        None => FontRegistry::global(),
    };

    let font_name = args.font.as_deref().unwrap_or(&cfg.fonts.default);
    let font = registry.load(font_name)?;
    let max_width = args.max_width.unwrap_or(cfg.fonts.max_width);
    let art = figlet::render(&font, &args.text, max_width);

    let slogan = args.slogan.as_deref().or(cfg.banner.slogan.as_deref());
    Ok(banner::compose(&art, slogan, banner::text_width(&art)))
}

/// Print the preset ramps.
pub fn list_charsets() {
    println!("Available charsets (densest glyph first):");
    for set in CharSet::ALL {
        let ramp: String = set.chars().iter().collect();
        println!("  {:<10} \"{}\"", set.name(), ramp);
    }
    println!();
    println!("Use --charset <name> or --ramp <chars> to select one.");
}

/// Print the fonts found in `dir`.
pub fn list_fonts(dir: &Path) -> Result<(), Error> {
    let names = FontRegistry::new(dir).available()?;
    if names.is_empty() {
        println!("No fonts found in {}", dir.display());
        println!();
        println!("Download .flf files from the FIGlet font collection into that directory,");
        println!("or point --font-dir at an existing one.");
    } else {
        println!("Fonts in {}:", dir.display());
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), Error> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let cfg = Config::load(Some(config_path.as_path()))?;
            let text = toml::to_string_pretty(&cfg)
                .map_err(|e| Error::Usage(format!("Failed to format config: {}", e)))?;
            println!("Current configuration:");
            println!();
            println!("{}", text.trim_end());
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(Error::Usage(format!(
                    "Config file already exists: {}\nUse 'banner-gen config show' to view current settings.",
                    config_path.display()
                )));
            }
            write_file(&config_path, DEFAULT_CONFIG_TOML)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn emit(contents: &str, output: Option<&Path>) -> Result<(), Error> {
    match output {
        Some(path) => {
            write_file(path, contents)?;
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{}", contents);
            if !contents.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    banner::write(path, contents)
        .map(|_| ())
        .map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
