#[macro_use]
extern crate clap;

use runreport::{
    config, model, report,
    ux::{
        clap::{arg, config_file, Action, Clappable},
        exit::ExitCode,
        out::{self, Outputtable},
    },
};

use clap::{App, Arg};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(app().get_matches()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::SETUP_ERROR)
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("runreport")
        .author(crate_authors!())
        .version(crate_version!())
        .about("Aggregates test results into a run report")
        .arg(
            Arg::with_name(arg::EMPTY)
                .help("What to do with plans that ran no tests")
                .short("-e")
                .long("--empty")
                .value_name("POLICY")
                .possible_values(config::empty::string::ALL),
        )
        .arg(
            Arg::with_name(arg::FORMAT)
                .help("Output format")
                .short("-f")
                .long("--format")
                .value_name("FORMAT")
                .possible_values(out::choice::string::ALL),
        )
        .arg(
            Arg::with_name(arg::OUTPUT)
                .help("Write output to FILE instead of stdout")
                .short("-o")
                .long("--output")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name(arg::COLOR)
                .help("When to colour output")
                .long("--color")
                .value_name("WHEN")
                .possible_values(out::color::string::ALL),
        )
        .arg(
            Arg::with_name(arg::CONFIG)
                .help("Read config from FILE instead of the default")
                .short("-c")
                .long("--config")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name(arg::REPORT)
                .help("Treat INPUT as an existing report document, and show it")
                .short("-r")
                .long("--report"),
        )
        .arg(
            Arg::with_name(arg::DUMP_CONFIG)
                .help("Dump config instead of reporting")
                .long("--dump-config"),
        )
        .arg(
            Arg::with_name(arg::DUMP_CONFIG_PATH)
                .help("Dump the default config path instead of reporting")
                .long("--dump-config-path"),
        )
        .arg(
            Arg::with_name(arg::INPUT)
                .help("The test results (.json, .toml) to report on")
                .required_unless_one(&[arg::DUMP_CONFIG, arg::DUMP_CONFIG_PATH])
                .index(1),
        )
}

fn run(matches: clap::ArgMatches) -> anyhow::Result<i32> {
    let config_path = config_file(&matches);
    let config = config::io::load(&config_path)?.parse_clap(&matches)?;

    match Action::from_clap(&matches)? {
        Action::DumpConfig => dump_config(config),
        Action::DumpConfigPath => dump_config_path(&config_path),
        Action::Build(input, out) => build_report(config, &input, out),
        Action::Show(input, out) => show_report(&input, out),
    }
}

fn dump_config(config: config::Config) -> anyhow::Result<i32> {
    println!("{}", config.to_string()?);
    Ok(ExitCode::SUCCESS)
}

fn dump_config_path(path: &Path) -> anyhow::Result<i32> {
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn build_report(config: config::Config, input: &Path, out: out::Config) -> anyhow::Result<i32> {
    let notify = config.notify();
    let report = report::Input::load(input)?.into_report(config.empty, notify)?;
    output(report, out)
}

fn show_report(input: &Path, out: out::Config) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(input)?;
    let report = report::deserialize(report::Document::from_json(&text)?)?;
    output(report, out)
}

fn output(report: model::RunReport, out: out::Config) -> anyhow::Result<i32> {
    report.output(out)?;
    Ok(ExitCode::for_outcome(report.outcome()))
}
