//! Print the three states of the classic figure: start, after flipping the
//! center, then after flipping vertex 10.
//!
//! Usage:
//!   cargo run -p hexflip --example three_panels

use hexflip::prelude::*;

fn main() {
    let mut g = HexGraph::new();
    let mut frames = vec![Frame::capture(&g, 0, None)];
    for (step, id) in [9usize, 10].into_iter().enumerate() {
        let id = VertexId(id);
        match g.flip(id) {
            Ok(outcome) => println!("flip {id}: {outcome:?}"),
            Err(err) => eprintln!("flip {id}: {err}"),
        }
        frames.push(Frame::capture(&g, step + 1, Some(id)));
    }
    for f in &frames {
        println!(
            "step={} edges={} marked={}",
            f.step,
            f.edges.len(),
            f.title()
        );
    }
}
