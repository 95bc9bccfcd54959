use crate::records::load_routes;
use crate::StopClustersError;
use clustering::affinity::build_affinity_matrix;
use clustering::graph::aggregate;
use clustering::pic::{self, PicParams};
use clustering::report::write_report;
use clustering::stop_index::StopIndex;
use common::types::config::Config;
use common::util::logging::run_with_spinner;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Run the whole batch pipeline: records -> edges -> stop index -> affinity matrix -> clusters
/// -> report. Every stage consumes the previous stage's full output; there is no streaming.
pub(super) fn run(config: Config) -> Result<(), StopClustersError> {
    let Config::Version1 {
        routes_file,
        output_file,
        clustering,
    } = config;

    let routes = run_with_spinner("pipeline", "Loading extracted departure records", || {
        load_routes(&routes_file)
    })?;
    info!(target: "pipeline", "Loaded {} routes from '{}'", routes.len(), routes_file.display());

    let edges = run_with_spinner("pipeline", "Building stop graph", || aggregate(&routes));
    info!(target: "pipeline", "Aggregated {} distinct edges", edges.len());

    let stop_index = StopIndex::from_edges(&edges);
    info!(target: "pipeline", "Indexed {} distinct stops", stop_index.len());

    let entries = build_affinity_matrix(&edges, &stop_index)?;

    let assignment = run_with_spinner("pipeline", "Training power iteration clustering", || {
        pic::train(stop_index.len(), &entries, PicParams::from(clustering))
    })?;

    // The report is only written once clustering has fully succeeded, so a fatal error upstream
    // never leaves a partial output file behind
    let mut writer = BufWriter::new(File::create(&output_file)?);
    write_report(&mut writer, &entries, &stop_index, &assignment)?;
    writer.flush()?;
    info!(target: "pipeline", "Report with {} entries written to '{}'", entries.len(), output_file.display());

    Ok(())
}
