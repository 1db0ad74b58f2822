use std::process::ExitCode;

use clap::Parser;
use miette::IntoDiagnostic;

use demo_sample_fetcher::app::{App, ProgressSink};
use demo_sample_fetcher::client::{HttpSampleClient, SampleClient};
use demo_sample_fetcher::command::Command;
use demo_sample_fetcher::config::ConfigLoader;
use demo_sample_fetcher::domain::Category;
use demo_sample_fetcher::error::FetchError;
use demo_sample_fetcher::logging;
use demo_sample_fetcher::output::{CheckResult, HumanOutput, JsonOutput, OutputMode};

#[derive(Parser)]
#[command(name = "sample-fetch")]
#[command(about = "Download demo document and video samples listed in JSON manifests")]
#[command(version, author)]
struct Cli {
    /// Path to a sample-fetch.json config file
    #[arg(long)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// One of: download, download_doc_samples, download_video_samples,
    /// are_doc_samples_downloaded, are_video_samples_downloaded
    command: Option<String>,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<FetchError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &FetchError) -> u8 {
    match error {
        FetchError::ManifestRead(_) | FetchError::ManifestParse { .. } => 2,
        FetchError::Http(_) | FetchError::HttpStatus { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = ConfigLoader::resolve(cli.config.as_deref())?;
    logging::init(&config.log)?;

    let Some(name) = cli.command else {
        tracing::debug!("no command given");
        return Ok(());
    };
    let command = match name.parse::<Command>() {
        Ok(command) => command,
        Err(unknown) => {
            println!("{unknown}");
            return Ok(());
        }
    };

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let client = HttpSampleClient::new(&config.http)?;
    let app = App::new(config, client);
    run_command(command, &app, output_mode)
}

fn run_command<C: SampleClient>(
    command: Command,
    app: &App<C>,
    output_mode: OutputMode,
) -> miette::Result<()> {
    let sink: &dyn ProgressSink = match output_mode {
        OutputMode::Json => &JsonOutput,
        OutputMode::Human => &HumanOutput,
    };

    match command {
        Command::Download => {
            let result = app.download(sink)?;
            let printed = match output_mode {
                OutputMode::Json => JsonOutput::print_download(&result),
                OutputMode::Human => HumanOutput::print_download(&result),
            };
            printed.into_diagnostic()
        }
        Command::DownloadDocSamples | Command::DownloadVideoSamples => {
            let category = if command == Command::DownloadDocSamples {
                Category::Documents
            } else {
                Category::Videos
            };
            let records = app.download_samples(category, sink)?;
            let printed = match output_mode {
                OutputMode::Json => JsonOutput::print_samples(&records),
                OutputMode::Human => HumanOutput::print_samples(category, &records),
            };
            printed.into_diagnostic()
        }
        Command::AreDocSamplesDownloaded | Command::AreVideoSamplesDownloaded => {
            let category = if command == Command::AreDocSamplesDownloaded {
                Category::Documents
            } else {
                Category::Videos
            };
            let result = CheckResult {
                category,
                downloaded: app.are_category_downloaded(category)?,
            };
            let printed = match output_mode {
                OutputMode::Json => JsonOutput::print_check(&result),
                OutputMode::Human => HumanOutput::print_check(&result),
            };
            printed.into_diagnostic()
        }
    }
}
