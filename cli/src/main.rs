use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use geoseed_db::GeoDataset;
use geoseed_sql::{SqlScript, generate_city_sql, generate_country_sql, generate_state_sql};

/// Fixed output file name for the country script.
const COUNTRIES_SCRIPT: &str = "Insert_Countries.sql";
/// Fixed output file name for the state script.
const STATES_SCRIPT: &str = "Insert_States.sql";
/// Fixed output file name for the city script.
const CITIES_SCRIPT: &str = "Insert_Cities.sql";

#[derive(Debug, Parser)]
#[command(name = "geoseed")]
#[command(about = "Generate SQL seed scripts from geographic reference datasets")]
struct Cli {
    /// Directory containing Countries.json, States.json, and Cities.json.
    /// Defaults to the directory of the running executable.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory the generated SQL scripts are written to.
    /// Defaults to the input directory.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let input = match cli.input {
        Some(path) => path,
        None => default_base_dir()?,
    };
    let output = cli.output.unwrap_or_else(|| input.clone());

    println!("Generating SQL insert scripts...");

    let dataset = GeoDataset::load_dir(&input).map_err(|err| {
        format!(
            "Failed to load datasets from '{}': {err}",
            input.display()
        )
    })?;

    fs::create_dir_all(&output).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            output.display()
        )
    })?;

    // Each script is generated in full before its file is touched, so a
    // failing write never leaves a partially generated script behind.
    let countries = generate_country_sql(&dataset.countries);
    write_script(&output, COUNTRIES_SCRIPT, &countries)?;

    let states = generate_state_sql(&dataset.states);
    write_script(&output, STATES_SCRIPT, &states)?;

    let cities = generate_city_sql(&dataset.cities);
    write_script(&output, CITIES_SCRIPT, &cities)?;

    println!("SQL scripts generated successfully.");
    println!("Files saved in: {}", output.display());

    Ok(())
}

/// Writes one generated script (full overwrite) and prints its summary line.
fn write_script(output: &Path, file_name: &str, script: &SqlScript) -> Result<(), String> {
    let path = output.join(file_name);
    fs::write(&path, &script.sql)
        .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
    println!(
        "  {file_name}: {} inserts, {} skipped",
        script.inserted, script.skipped
    );
    Ok(())
}

/// The default base directory: where the running executable lives, falling
/// back to the current directory when that cannot be determined.
fn default_base_dir() -> Result<PathBuf, String> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return Ok(dir.to_path_buf());
        }
    }
    std::env::current_dir().map_err(|err| format!("Failed to resolve working directory: {err}"))
}
