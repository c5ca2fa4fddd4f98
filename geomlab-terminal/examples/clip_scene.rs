/// Example: clip a segment scene loaded from a file
///
/// Usage: cargo run --example clip_scene -- path/to/scene.txt

use std::env;
use std::fs;
use std::io;

use geomlab_core::clip::liang_barsky;
use geomlab_core::segfile;

const DEMO_SCENE: &str = "5\n0 0 18 12\n3 15 16 -1\n5 5 5 14\n10 0 20 12\n12 7 4 9\n2 2 14 10\n";

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let text = if args.len() < 2 {
        eprintln!("Usage: {} <scene-file>", args[0]);
        eprintln!("\nNo scene file provided, using the built-in demo scene...");
        DEMO_SCENE.to_string()
    } else {
        fs::read_to_string(&args[1])?
    };

    let scene = segfile::parse_scene(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse scene: {}", e)))?;

    println!(
        "Clip window: ({}, {}) - ({}, {})",
        scene.clip.xmin, scene.clip.ymin, scene.clip.xmax, scene.clip.ymax
    );
    let mut visible = 0;
    for seg in &scene.segments {
        match liang_barsky(&scene.clip, seg) {
            Some(clipped) => {
                visible += 1;
                println!(
                    "({:.2}, {:.2})-({:.2}, {:.2}) -> ({:.2}, {:.2})-({:.2}, {:.2})",
                    seg.a.x, seg.a.y, seg.b.x, seg.b.y,
                    clipped.a.x, clipped.a.y, clipped.b.x, clipped.b.y
                );
            }
            None => println!(
                "({:.2}, {:.2})-({:.2}, {:.2}) -> outside",
                seg.a.x, seg.a.y, seg.b.x, seg.b.y
            ),
        }
    }
    println!("{} of {} segments visible", visible, scene.segments.len());
    Ok(())
}
