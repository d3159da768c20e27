use curvecast::{RenderOpts, SceneDocument, render_frame};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let doc = SceneDocument::from_json_str(include_str!("../tests/data/badge.json"))?;
    let scene = doc.encode()?;
    println!(
        "{} shapes, {} floats",
        scene.shape_count(),
        scene.as_floats().len()
    );

    let opts = RenderOpts {
        parallel: true,
        ..RenderOpts::default()
    };
    let frame = render_frame(&scene, doc.width, doc.height, &opts)?;

    let out = std::path::Path::new("target").join("demos").join("badge.png");
    frame.save_png(&out)?;
    println!("wrote {}", out.display());
    Ok(())
}
