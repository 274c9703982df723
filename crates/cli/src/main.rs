mod args;
mod output;
mod pipeline;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use polyseq::aggregate::Aggregate;
use polyseq::generators::{random_polygon_sequence, random_polygon_sequence_seeded, TapeCfg};
use polyseq::{Count, Polygon};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use args::PipelineArgs;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "polyseq")]
#[command(about = "Generate, transform, filter and reduce polygon sequences")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Regular polygons laid out left to right along the x axis
    Tape {
        #[arg(long)]
        sides: usize,
        /// Gap between consecutive bounding boxes
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Number of polygons, or `inf`
        #[arg(long, default_value = "inf")]
        count: Count,
        #[arg(long, default_value_t = 1.0)]
        side_length: f64,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Random simple polygons
    Random {
        #[arg(long)]
        count: Count,
        /// Fixed side count; 3 to 12 when omitted
        #[arg(long)]
        sides: Option<usize>,
        /// Seed for a reproducible stream
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Tape {
            sides,
            step,
            count,
            side_length,
            pipeline,
        } => tape(sides, step, count, side_length, pipeline),
        Action::Random {
            count,
            sides,
            seed,
            pipeline,
        } => random(count, sides, seed, pipeline),
        Action::Report => report(),
    }
}

fn tape(
    sides: usize,
    step: f64,
    count: Count,
    side_length: f64,
    args: PipelineArgs,
) -> Result<()> {
    tracing::info!(sides, step, %count, side_length, "tape");
    if count.is_unbounded() {
        if args.stop.is_none() {
            bail!("an unbounded tape needs --stop (or a finite --count)");
        }
        // The window counts survivors, so a filter that never matches would
        // keep pulling from the tape forever.
        if args.has_filters() {
            bail!("filters on an unbounded tape need a finite --count");
        }
    }
    let tape = TapeCfg {
        step,
        count,
        side_length,
        ..TapeCfg::new(sides)
    }
    .build()?;
    tracing::debug!(x_shift = tape.x_shift(), "tape_built");
    let params = json!({
        "sides": sides,
        "step": step,
        "count": count.to_string(),
        "side_length": side_length,
        "pipeline": &args,
    });
    emit("tape", tape, &args, params)
}

fn random(
    count: Count,
    sides: Option<usize>,
    seed: Option<u64>,
    args: PipelineArgs,
) -> Result<()> {
    tracing::info!(%count, sides = ?sides, seed = ?seed, "random");
    let stream = match seed {
        Some(seed) => random_polygon_sequence_seeded(count, sides, seed)?,
        None => random_polygon_sequence(count, sides)?,
    };
    let params = json!({
        "count": count.to_string(),
        "sides": sides,
        "seed": stream.seed(),
        "pipeline": &args,
    });
    emit("random", stream, &args, params)
}

/// Run the pipeline and write either one aggregate or the polygons.
fn emit<I>(
    command: &'static str,
    seq: I,
    args: &PipelineArgs,
    params: serde_json::Value,
) -> Result<()>
where
    I: Iterator<Item = Polygon> + 'static,
{
    let seq = pipeline::build(seq, args)?;

    if let Some(name) = &args.aggregate {
        let agg: Aggregate = name.parse()?;
        let value = agg.apply(seq)?;
        tracing::info!(aggregate = %agg, value, "aggregate");
        println!("{value}");
        return Ok(());
    }

    let polys: Vec<Polygon> = seq.collect();
    tracing::info!(polygons = polys.len(), "collected");
    match &args.out {
        Some(path) => {
            output::write(path, &polys)?;
            let sidecar = provenance::write_sidecar(path, Payload::new(command, params))?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(&output::polygons_json(&polys))?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "tool": "polyseq",
        "version": polyseq::VERSION,
        "code_rev": provenance::current_git_rev(),
        "aggregates": Aggregate::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_tape_with_pipeline_flags() {
        let cmd = Cmd::try_parse_from([
            "polyseq", "tape", "--sides", "6", "--count", "inf", "--rotate", "-30",
            "--translate", "-1,2", "--stop", "4", "--aggregate", "area",
        ])
        .unwrap();
        match cmd.action {
            Action::Tape {
                sides,
                count,
                pipeline,
                ..
            } => {
                assert_eq!(sides, 6);
                assert!(count.is_unbounded());
                assert_eq!(pipeline.rotate, Some(-30.0));
                assert_eq!(pipeline.translate, Some(args::Pair(-1.0, 2.0)));
                assert_eq!(pipeline.stop, Some(4));
                assert_eq!(pipeline.every, 1);
            }
            _ => panic!("expected tape"),
        }
    }

    #[test]
    fn rejects_negative_count() {
        assert!(Cmd::try_parse_from(["polyseq", "random", "--count", "-3"]).is_err());
    }

    #[test]
    fn unbounded_tape_needs_stop() {
        let err = tape(4, 1.0, Count::Unbounded, 1.0, PipelineArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--stop"));
    }

    #[test]
    fn unbounded_tape_rejects_filters() {
        let far_vertex = PipelineArgs {
            vertex: Some(args::Pair(1000.0, 1000.0)),
            stop: Some(1),
            ..PipelineArgs::default()
        };
        let err = tape(4, 1.0, Count::Unbounded, 1.0, far_vertex.clone()).unwrap_err();
        assert!(err.to_string().contains("--count"));

        // A finite tape with the same filter just comes back empty.
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("none.json");
        let finite = PipelineArgs {
            out: Some(out.clone()),
            ..far_vertex
        };
        tape(4, 1.0, Count::Finite(50), 1.0, finite).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(out).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!([]));
    }

    #[test]
    fn writes_output_with_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tape.csv");
        let args = PipelineArgs {
            out: Some(out.clone()),
            ..PipelineArgs::default()
        };
        tape(5, 0.5, Count::Finite(3), 1.0, args).unwrap();
        assert!(out.exists());
        assert!(dir.path().join("tape.provenance.json").exists());
    }
}
