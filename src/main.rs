// Command line wrapper around the document validator: prints true/false for
// one code, exit code 0 when valid and 1 when not.

use clap::Parser;
use codice::models::ProvinceRegistry;
use codice::DocumentValidator;

#[derive(Parser)]
#[command(name = "codice", version, about = "Validate an identity document code")]
struct Cli {
    /// The document code to validate
    code: String,

    /// Extra province codes for the province drivers'-license rule
    #[arg(long, value_delimiter = ',', value_name = "CODE")]
    provinces: Vec<String>,

    /// Print a rule-by-rule JSON report instead of true/false
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut provinces = ProvinceRegistry::new();
    for code in &cli.provinces {
        if let Err(err) = provinces.register(code) {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    }

    let mut validator = DocumentValidator::with_provinces(provinces);
    validator.set_observer(|evaluation| {
        log::debug!(
            "rule {} on {:?}: {}",
            evaluation.rule_name,
            evaluation.code,
            if evaluation.matched { "matched" } else { "no match" }
        );
    });

    let result = validator.validate_detailed(&cli.code);

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(report) => println!("{}", report),
            Err(err) => {
                eprintln!("Error serializing report: {}", err);
                std::process::exit(2);
            }
        }
    } else {
        println!("{}", result.is_valid);
    }

    std::process::exit(if result.is_valid { 0 } else { 1 });
}
