//! The command line interface for bincalc.
use crate::calculator::{Calculator, Inputs, parse_number_of_units};
use crate::development_type::DevelopmentType;
use crate::input::{Development, read_scenario};
use crate::log;
use crate::output::{DataWriter, create_output_directory};
use crate::report;
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for bincalc.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Inputs for a single development
#[derive(Args)]
pub struct InputOpts {
    /// Number of dwellings (or rooms, for boarding houses), up to 100000
    #[arg(short, long, value_parser = parse_number_of_units)]
    pub units: u32,
    /// Whether the development is seniors housing
    #[arg(long)]
    pub seniors_housing: bool,
    /// Whether waste is compacted at a 1:2 ratio
    #[arg(long)]
    pub compaction: bool,
    /// Number of waste collections per week (1-3)
    #[arg(long, default_value_t = 1)]
    pub collections_per_week: u32,
    /// Number of recycling collections per fortnight (1-2)
    #[arg(long, default_value_t = 1)]
    pub collections_per_fortnight: u32,
}

impl InputOpts {
    /// Validate the options and convert them to [`Inputs`]
    fn to_inputs(&self) -> Result<Inputs> {
        let mut inputs = Inputs::default();
        inputs.set_number_of_units(self.units)?;
        inputs.set_is_seniors_housing(self.seniors_housing);
        inputs.set_has_compaction(self.compaction);
        inputs.set_collections_per_week(self.collections_per_week)?;
        inputs.set_collections_per_fortnight(self.collections_per_fortnight)?;

        Ok(inputs)
    }
}

/// Options for where results are written
#[derive(Args, Default)]
pub struct OutputOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// List the available development types.
    Types,
    /// Calculate bin requirements for a single development.
    Calculate {
        /// The development type, e.g. residential_flat
        #[arg(value_parser = DevelopmentType::from_id)]
        development_type: DevelopmentType,
        /// Inputs for the development
        #[command(flatten)]
        inputs: InputOpts,
        /// Output options
        #[command(flatten)]
        opts: OutputOpts,
    },
    /// Calculate bin requirements for every development in a scenario file.
    Run {
        /// Path to the scenario file.
        scenario_file: PathBuf,
        /// Output options
        #[command(flatten)]
        opts: OutputOpts,
    },
    /// Manage settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Types => {
                handle_types_command();
                Ok(())
            }
            Self::Calculate {
                development_type,
                inputs,
                opts,
            } => handle_calculate_command(development_type, &inputs, &opts, None),
            Self::Run {
                scenario_file,
                opts,
            } => handle_run_command(&scenario_file, &opts, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start bincalc
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ bincalc --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Handle the `types` command.
fn handle_types_command() {
    println!(
        "{:<20} {:>2}  {:<10} {:<8} {:>7} {:>9} {:>8} {:>6}",
        "type", "no", "bins", "pickup", "waste", "recycling", "organics", "bulky"
    );
    for development_type in DevelopmentType::iter() {
        let constants = development_type.constants();
        println!(
            "{:<20} {:>2}  {:<10} {:<8} {:>7} {:>9} {:>8} {:>6}",
            development_type.id(),
            constants.calculator_id,
            constants.bin_type.to_string(),
            constants.collection_type.to_string(),
            constants.waste_generation_rate.value(),
            constants.recycling_generation_rate.value(),
            constants.organics_generation_rate.value(),
            constants.bulky_waste_space.value()
        );
    }
}

/// Load program settings, if not provided
fn load_settings(settings: Option<Settings>) -> Result<Settings> {
    match settings {
        Some(settings) => Ok(settings),
        None => Settings::load().context("Failed to load settings."),
    }
}

/// Create the output folder (if requested) and initialise the program logger.
///
/// # Returns
///
/// The path to the output folder, if there is one
fn prepare_run<'a>(opts: &'a OutputOpts, settings: &Settings) -> Result<Option<&'a Path>> {
    let output_path = opts.output_dir.as_deref();
    let mut overwrite = false;
    if let Some(output_path) = output_path {
        overwrite = create_output_directory(output_path, opts.overwrite || settings.overwrite)
            .with_context(|| {
                format!(
                    "Failed to create output directory: {}",
                    output_path.display()
                )
            })?;
    }

    // The logger can only be set up once per process
    log::init_once(&settings.log_level, output_path).context("Failed to initialise logging.")?;

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    Ok(output_path)
}

/// Calculate results for each development, print them and optionally write them to disk.
///
/// The logger must already be initialised, so that warnings about the inputs are not lost.
fn calculate_developments(
    developments: &mut [Development],
    output_path: Option<&Path>,
) -> Result<()> {
    for development in developments.iter_mut() {
        development.calculator.warn_unavailable_choices();
        development.calculator.calculate();
        println!("{}", report::render(&development.name, &development.calculator));
    }

    if let Some(output_path) = output_path {
        let mut writer = DataWriter::create(output_path)?;
        for development in developments.iter() {
            writer.write_development(&development.name, &development.calculator)?;
        }
        writer.flush()?;
        info!("Results written to {}", output_path.display());
    }

    Ok(())
}

/// Handle the `calculate` command.
pub fn handle_calculate_command(
    development_type: DevelopmentType,
    inputs: &InputOpts,
    opts: &OutputOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let inputs = inputs.to_inputs()?;
    let settings = load_settings(settings)?;
    let output_path = prepare_run(opts, &settings)?;

    let mut developments = [Development {
        name: development_type.id().to_string(),
        calculator: Calculator::with_inputs(development_type, inputs),
    }];

    calculate_developments(&mut developments, output_path)
}

/// Handle the `run` command.
pub fn handle_run_command(
    scenario_path: &Path,
    opts: &OutputOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let mut developments = read_scenario(scenario_path).context("Failed to load scenario.")?;
    let settings = load_settings(settings)?;
    let output_path = prepare_run(opts, &settings)?;

    info!(
        "Loaded {} developments from {}",
        developments.len(),
        scenario_path.display()
    );

    calculate_developments(&mut developments, output_path)?;
    info!("Calculation complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "bincalc",
            "calculate",
            "residential_flat",
            "--units",
            "40",
            "--compaction",
            "--collections-per-week",
            "2",
        ])
        .unwrap();

        let Some(Commands::Calculate {
            development_type,
            inputs,
            opts,
        }) = cli.command
        else {
            panic!("Expected calculate command");
        };
        assert_eq!(development_type, DevelopmentType::ResidentialFlat);
        assert_eq!(inputs.units, 40);
        assert!(inputs.compaction);
        assert!(!inputs.seniors_housing);
        assert_eq!(inputs.collections_per_week, 2);
        assert_eq!(inputs.collections_per_fortnight, 1);
        assert!(opts.output_dir.is_none());

        let inputs = inputs.to_inputs().unwrap();
        assert_eq!(inputs.number_of_units(), 40);
        assert!(inputs.has_compaction());
    }

    #[test]
    fn test_parse_calculate_invalid() {
        assert!(Cli::try_parse_from(["bincalc", "calculate", "castle", "--units", "4"]).is_err());
        assert!(
            Cli::try_parse_from(["bincalc", "calculate", "standard_single", "--units", "0"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["bincalc", "calculate", "standard_single"]).is_err());
    }

    #[test]
    fn test_to_inputs_invalid_collections() {
        let opts = InputOpts {
            units: 10,
            seniors_housing: false,
            compaction: false,
            collections_per_week: 4,
            collections_per_fortnight: 1,
        };
        assert_eq!(
            opts.to_inputs().unwrap_err().to_string(),
            "Invalid value for collections_per_week: must be between 1 and 3, got 4"
        );
    }
}
