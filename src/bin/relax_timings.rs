use anyhow::Context;
use relax::harness::*;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("relax_timings")?;

    let records = run_from_args(&args).with_context(|| {
        format!("timing run failed, times so far are in {:?}", args.times_file)
    })?;

    let unconverged = records.iter().filter(|r| !r.converged).count();
    if unconverged > 0 {
        tracing::warn!(unconverged, "some runs did not reach a fixed point");
    }
    tracing::info!(
        runs = records.len(),
        times_file = %args.times_file.display(),
        "done"
    );

    args.finish();
    Ok(())
}
