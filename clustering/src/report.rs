use crate::affinity::AffinityEntry;
use crate::pic::ClusterAssignment;
use crate::stop_index::StopIndex;
use std::io;
use std::io::Write;

/// Write the final report: one line per affinity entry, five semicolon-separated fields
///
/// `stopNameA;stopNameB;clusterIdA;clusterIdB;weight`
///
/// Line order follows the (i, j)-sorted entries. The weight is rendered through f64's `Display`,
/// the shortest decimal form that round-trips to the same double.
pub fn write_report<W: Write>(
    writer: &mut W,
    entries: &[AffinityEntry],
    stop_index: &StopIndex,
    assignment: &ClusterAssignment,
) -> io::Result<()> {
    for entry in entries {
        let name_a = stop_index
            .name_of(entry.i)
            .expect("affinity entries refer to indexed stops");
        let name_b = stop_index
            .name_of(entry.j)
            .expect("affinity entries refer to indexed stops");
        let cluster_a = assignment
            .cluster_of(entry.i)
            .expect("every indexed stop was assigned a cluster");
        let cluster_b = assignment
            .cluster_of(entry.j)
            .expect("every indexed stop was assigned a cluster");

        writeln!(
            writer,
            "{};{};{};{};{}",
            name_a, name_b, cluster_a, cluster_b, entry.weight
        )?;
    }
    Ok(())
}
