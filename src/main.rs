use clap::{Parser, Subcommand};
use manual_nav::{config, output, registry, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "manual-nav")]
#[command(about = "Sidebar navigation generator for bilingual manuals")]
#[command(long_about = "\
Sidebar navigation generator for bilingual manuals

Derives per-language sidebar data from a tree of markdown pages. Pages
tagged `category: Manual` under the versioned manual tree are selected
per language (en, ja), ordered by their numeric filename prefix, and
reduced to {title, url, permalink} records.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── index.md
  └── manuals/1.0/
      ├── en/
      │   ├── index.md             # Never in the sidebar
      │   ├── 01-getting-started.md
      │   ├── 02-configuration.md
      │   ├── appendix.md          # Unprefixed files sort last
      │   └── convention/          # Style-guide pages, always excluded
      └── ja/
          ├── 01-hajimeni.md
          └── 02-settei.md

Output: one JSON data file per language (sidebar_en.json, sidebar_ja.json)
holding the ordered entries for the navigation template.

Run 'manual-nav gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Directory for generated sidebar data files
    #[arg(long, default_value = "_data", global = true)]
    data_dir: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".manual-nav-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Build sidebar data files from an existing manifest
    Sidebar,
    /// Run the full pipeline: scan → sidebar
    Build,
    /// Report per-language selection without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);
        }
        Command::Sidebar => {
            let manifest = read_manifest(&cli.temp_dir)?;
            let reg = build_registry(&manifest);
            registry::write_data_files(&reg, &cli.data_dir)?;
            output::print_sidebar_output(&reg);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Building sidebars → {}", cli.data_dir.display());
            let reg = build_registry(&manifest);
            registry::write_data_files(&reg, &cli.data_dir)?;
            output::print_sidebar_output(&reg);

            println!("==> Build complete: {}", cli.data_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_check_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}

fn read_manifest(temp_dir: &Path) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(temp_dir.join("manifest.json"))?;
    Ok(serde_json::from_str(&content)?)
}

fn build_registry(manifest: &scan::Manifest) -> registry::DataRegistry {
    let selector = manifest.config.selector();
    let mut reg = registry::DataRegistry::new();
    registry::populate(&mut reg, &manifest.pages, &selector);
    reg
}
