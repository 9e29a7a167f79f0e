use clap::Parser;
use costlens::cli::Args;
use costlens::report::{render, saved_to_yaml};
use costlens::{AnalysisRun, ConsoleNotifier, ProjectFile, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir();

    init_logging(&data_dir, &args.log_level)?;

    let project = match &args.project {
        Some(path) => ProjectFile::load(path)?,
        None => {
            tracing::info!("No project file given, using sample project");
            ProjectFile::sample()
        }
    };

    let now = jiff::Timestamp::now();
    let mut run = AnalysisRun::new(project, now);
    let request = args.request();

    let mut notifier = ConsoleNotifier;
    if let Err(e) = run.apply(&request, &mut notifier, now) {
        // already reported through the notifier
        tracing::warn!(error = %e, "Analysis not saved");
    }

    print!("{}", render(&run, request.view));

    if args.export {
        print!("{}", saved_to_yaml(run.session.saved_analyses())?);
    }

    tracing::info!("costlens finished");
    Ok(())
}
