//! Textual summaries of structures and their results

use std::fmt::Write;

use crate::model::Structure;

/// Render a line-per-node listing of positions and fixities
pub fn render_nodes(structure: &Structure) -> String {
    let mut output = String::new();

    writeln!(&mut output, "Structure nodes:").expect("writing to string cannot fail");
    for node in structure.nodes() {
        writeln!(
            &mut output,
            "Node {}: ({:.1}, {:.1}) [{}]",
            node.index,
            node.x,
            node.y,
            node.fixity.name()
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// Render a line-per-member listing of connectivity, length and axial force
pub fn render_members(structure: &Structure) -> String {
    let mut output = String::new();
    let nodes = structure.nodes();

    writeln!(&mut output, "Structure members:").expect("writing to string cannot fail");
    for (i, member) in structure.members().iter().enumerate() {
        let length = nodes[member.start].distance_to(&nodes[member.end]);
        match member.axial() {
            Some(axial) => writeln!(
                &mut output,
                "Member {}: ({} -> {}), L = {:.1}, axial = {:.2}",
                i, member.start, member.end, length, axial
            ),
            None => writeln!(
                &mut output,
                "Member {}: ({} -> {}), L = {:.1}, axial = n/a",
                i, member.start, member.end, length
            ),
        }
        .expect("writing to string cannot fail");
    }

    output
}

/// Render an analysis summary with an illustrative buckling check
///
/// The buckling line compares the most compressed member's axial force
/// against its Euler load `pi^2*E*Ix/L^2`; it is informational only, not a
/// design check.
pub fn render_summary(structure: &Structure) -> String {
    let mut output = String::new();
    let nodes = structure.nodes();

    writeln!(
        &mut output,
        "{} structure: {} nodes, {} members, {} DOFs ({} free)",
        structure.kind().label(),
        structure.n_nodes(),
        structure.n_members(),
        structure.total_dofs(),
        structure.free_dofs().len()
    )
    .expect("writing to string cannot fail");

    if !structure.is_solved() {
        output.push_str("Not solved yet.\n");
        return output;
    }

    let mut max_axial = 0.0_f64;
    let mut max_axial_member = 0;
    let mut most_compressed: Option<(usize, f64)> = None;

    for (i, member) in structure.members().iter().enumerate() {
        let Some(axial) = member.axial() else { continue };
        if axial.abs() > max_axial.abs() {
            max_axial = axial;
            max_axial_member = i;
        }
        if axial < 0.0 && most_compressed.map_or(true, |(_, f)| axial < f) {
            most_compressed = Some((i, axial));
        }
    }

    writeln!(
        &mut output,
        "Largest axial force: {:.2} in member {}",
        max_axial, max_axial_member
    )
    .expect("writing to string cannot fail");

    if let Some((i, axial)) = most_compressed {
        let member = &structure.members()[i];
        let length = nodes[member.start].distance_to(&nodes[member.end]);
        let euler = member.euler_buckling_load(length);
        writeln!(
            &mut output,
            "Euler check on member {}: |P| = {:.2}, P_cr = {:.2}, factor = {:.2}",
            i,
            axial.abs(),
            euler,
            euler / axial.abs()
        )
        .expect("writing to string cannot fail");
    }

    output
}
