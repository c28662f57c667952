use std::path::PathBuf;

use anyhow::{Result, ensure};
use borepack::entities::PackingResult;
use borepack::io::ext_repr::ExtBoreInstance;
use borepack::io::{export, import};
use borepack::{PackError, pack_cables};
use itertools::Itertools;
use log::{error, info};
use std::time::Instant;
use thousands::Separable;

use crate::config::BoreCliConfig;
use crate::io::output::BoreOutput;

/// Outcome of solving a single instance.
/// The outer error is reserved for malformed instances,
/// the inner one for requests the engine declined.
pub type SolveOutcome = Result<Result<PackingResult, PackError>>;

/// Imports the instance and searches the bore for its cable selections
pub fn solve(ext_instance: &ExtBoreInstance, config: &BoreCliConfig) -> SolveOutcome {
    let (catalog, selections) = import::import(ext_instance)?;
    let start = Instant::now();
    let result = pack_cables(&selections, &catalog, &config.pack_config);
    if let Ok(result) = &result {
        info!(
            "[SOLVE] {}: {} circles in bore of diameter {:.3} (density {:.1}%), took {}µs",
            ext_instance.name,
            result.circles.len().separate_with_commas(),
            result.bore.diameter(),
            result.density() * 100.0,
            start.elapsed().as_micros().separate_with_commas()
        );
    }
    Ok(result)
}

pub fn create_output(
    ext_instance: ExtBoreInstance,
    result: &PackingResult,
    config: BoreCliConfig,
) -> BoreOutput {
    BoreOutput {
        instance: ext_instance,
        result: export::export(result),
        config,
    }
}

/// Logs every failed input and fails if there was at least one
pub fn report_outcomes(input_files: &[PathBuf], outcomes: Vec<Result<()>>) -> Result<()> {
    let mut n_failed = 0;
    for (input_file, outcome) in input_files.iter().zip_eq(outcomes) {
        if let Err(err) = outcome {
            error!("[MAIN] {}: {err:#}", input_file.display());
            n_failed += 1;
        }
    }
    info!(
        "[MAIN] processed {} input file(s), {n_failed} failed",
        input_files.len()
    );
    ensure!(
        n_failed == 0,
        "{n_failed} of {} input file(s) failed",
        input_files.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn failed_inputs_fail_the_run() {
        let inputs = vec![PathBuf::from("a.json"), PathBuf::from("b.json")];
        assert!(report_outcomes(&inputs, vec![Ok(()), Ok(())]).is_ok());

        let outcome = report_outcomes(&inputs, vec![Ok(()), Err(anyhow!("search exhausted"))]);
        assert_eq!(outcome.unwrap_err().to_string(), "1 of 2 input file(s) failed");
    }
}
