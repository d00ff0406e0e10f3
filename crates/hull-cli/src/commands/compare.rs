use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output;
use crate::query::OpenKimClient;
use kimhull::workflows::hull;
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let species = super::binary_species_list(&args.species)?;
    info!(
        species = ?species.names(),
        model = %args.model,
        "validating model hull against reference data"
    );

    let spinner = super::hull::query_spinner(format!(
        "Querying OpenKIM reference data and test results for {}...",
        args.model
    ));
    let client = OpenKimClient::default();
    let validation = hull::validate_model(&client, &species, &args.model);
    spinner.finish_and_clear();
    let validation = validation?;

    output::write_json(&validation, args.output.as_deref())?;

    eprintln!(
        "Model {}: {} hull vertices agree with the reference prototypes, {} disagree.",
        args.model,
        validation.comparison.agree.len(),
        validation.comparison.disagree.len()
    );
    Ok(())
}
