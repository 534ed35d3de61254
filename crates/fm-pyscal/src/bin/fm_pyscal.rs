//!
//! ERT forward model running pyscal with interpolation parameters taken
//! from `parameters.txt`.
//!
//! Usage: `fm_pyscal <relperm-file> <output> <sheet> <wo-param> <go-param> <sgof|slgof> <1|2>`

use clap::Parser;
use std::path::PathBuf;
use std::process;

use fm_pyscal::config::DEFAULT_PARAMETERS_FILE;
use fm_pyscal::{ForwardModelArgs, ForwardModelConfig, PyscalCli};

#[derive(Parser, Debug)]
#[command(name = "fm_pyscal")]
#[command(
    about = "ERT forward model wrapping around the pyscal command line client"
)]
#[command(
    long_about = "ERT forward model wrapping around the pyscal command line client. \
    In the forward model context, this gives access to interpolation parameters in \
    parameters.txt which the command line client is not aware of. For other uses, \
    head to the pyscal client from the pyscal package."
)]
struct Args {
    /// CSV or XLSX filename with relperm parameters. See pyscal documentation
    /// for table format.
    relperm_parameters_file: PathBuf,

    /// Location of Eclipse relperm include file to be written.
    output_filename: PathBuf,

    /// XLSX sheetname to use. Use __NONE__ or 0 for the first sheet.
    sheet_name: String,

    /// Interpolation parameter name to be parsed from parameters.txt for
    /// WaterOil if a SCAL recommendation is given, or __NONE__. The mnemonics
    /// __OPT__, __BASE__ and __PESS__ may also be used. Values must be in
    /// [-1,1]. A GEN_KW namespace in front of a colon is ignored.
    int_param_wo_name: String,

    /// Ditto for GasOil. If __NONE__, the WaterOil parameter is used.
    int_param_go_name: String,

    /// sgof, or slgof if SLGOF is wanted in place of SGOF. Case insensitive.
    slgof: String,

    /// Family 1 (SWOF + SGOF) or family 2 (SWFN + SOF3 + SGFN) for Eclipse
    /// keywords.
    #[arg(allow_negative_numbers = true, value_parser = integer_text)]
    family: String,

    /// pyscal command line client to run
    #[arg(long, default_value = "pyscal")]
    pyscal_executable: PathBuf,

    /// File to collect interpolation parameters from
    #[arg(long, default_value = DEFAULT_PARAMETERS_FILE)]
    parameters_file: PathBuf,
}

/// Accepts any optionally signed integer, however large; range checks are
/// left to the forward model so they exit like the other validation errors.
fn integer_text(value: &str) -> Result<String, String> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("{value:?} is not an integer"))
    }
}

fn main() {
    fm_pyscal::init_logging();

    let args = Args::parse();

    let config = ForwardModelConfig::default().with_parameters_file(&args.parameters_file);
    let generator = PyscalCli::new(args.pyscal_executable);
    let forward_model_args = ForwardModelArgs {
        relperm_parameters_file: args.relperm_parameters_file,
        output_filename: args.output_filename,
        sheet_name: args.sheet_name,
        int_param_wo_name: args.int_param_wo_name,
        int_param_go_name: args.int_param_go_name,
        slgof: args.slgof,
        family: args.family,
    };

    // failures are logged where they are detected
    if fm_pyscal::run(&forward_model_args, &config, &generator).is_err() {
        process::exit(1);
    }
}
