use crate::cli::{HullArgs, OutputFormat};
use crate::error::Result;
use crate::output;
use crate::query::OpenKimClient;
use indicatif::{ProgressBar, ProgressStyle};
use kimhull::workflows::hull;
use std::time::Duration;
use tracing::info;

pub fn run(args: HullArgs) -> Result<()> {
    let species = super::binary_species_list(&args.species)?;
    let model = args.model.as_deref();
    info!(
        species = ?species.names(),
        model = model.unwrap_or("(reference data)"),
        "building hull diagram"
    );

    let spinner = query_spinner(match model {
        Some(model) => format!("Querying OpenKIM test results for {model}..."),
        None => "Querying OpenKIM reference data...".to_string(),
    });
    let client = OpenKimClient::default();
    let diagram = hull::build_from_source(&client, &species, model);
    spinner.finish_and_clear();
    let diagram = diagram?;

    match args.format {
        OutputFormat::Json => output::write_json(&diagram, args.output.as_deref())?,
        OutputFormat::Csv => output::write_points_csv(&diagram, args.output.as_deref())?,
    }

    eprintln!(
        "Lower hull of {}-{}: {} stable vertices out of {} structures.",
        species.names()[0],
        species.names()[1],
        diagram.lower_hull.len(),
        diagram.points.len()
    );
    Ok(())
}

pub(crate) fn query_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message);
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or(ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
