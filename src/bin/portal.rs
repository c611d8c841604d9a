//! frame2d example - simple portal frame

use anyhow::Result;
use frame2d::prelude::*;
use frame2d::report;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== frame2d example: portal frame ===\n");

    // W12X26 columns and beam, A992 steel (kip/in units)
    let section = Section::from_shape("W12X26")?;
    let mut frame = Structure::frame(section, Material::a992());

    // A portal frame:
    //
    //     N2 -------- N3
    //     |          |
    //     |          |
    //     N1        N4
    //     ^          ^
    //   fixed      fixed
    //
    let height = 144.0; // 12 ft columns
    let span = 240.0; // 20 ft beam

    frame.add_node(0.0, 0.0, "fixed")?;
    frame.add_node(0.0, height, "free")?;
    frame.add_node(span, height, "free")?;
    frame.add_node(span, 0.0, "fixed")?;

    frame.add_member(0, 1)?;
    frame.add_member(1, 2)?;
    frame.add_member(2, 3)?;

    // 10 kip lateral load at the top-left corner plus 25 kip gravity loads
    let mut loads = DofVector::zeros(frame.kind(), frame.n_nodes());
    loads.set(1, Dof::X, 10.0)?;
    loads.set(1, Dof::Y, -25.0)?;
    loads.set(2, Dof::Y, -25.0)?;

    frame.solve(&loads)?;

    print!("{}", report::render_nodes(&frame));
    println!();
    print!("{}", report::render_members(&frame));
    println!();
    print!("{}", report::render_summary(&frame));

    let sway = frame.node_displacement(1)?[0];
    println!("\nLateral sway at N2: {sway:.4}");

    Ok(())
}
