use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use spheres::{
    renderer::{render_image_name, render_with_progress, Projection},
    scene::{self, View},
};
use std::{env, fs, path::PathBuf};

/// Render a scene of spheres to an image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opt {
    /// Scene description (JSON)
    #[arg(default_value = "scene.json")]
    scene: PathBuf,

    /// Output image; `.ppm` is written as text, other extensions go through `image`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// No progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "spheres=info");
    }
    env_logger::init();

    // ── parse JSON ────────────────────────────────────────────────────────
    let scene = scene::load(&opt.scene)
        .with_context(|| format!("loading scene {}", opt.scene.display()))?;
    let (width, height) = scene.view.size();

    // ── dump scene info ───────────────────────────────────────────────────
    match &scene.view {
        View::Camera(c) => info!(
            "camera {}x{} fov {:.2}°",
            c.hsize(),
            c.vsize(),
            c.field_of_view().to_degrees()
        ),
        View::Wall(w) => info!(
            "wall {}x{} from {:?}, z {:.2}, size {:.2}",
            w.width, w.height, w.origin, w.z, w.size
        ),
    }
    info!("{} objects", scene.world.objects().len());
    for (name, s) in scene.names.iter().zip(scene.world.objects()) {
        debug!(
            " [{}] sphere '{}' mat_color {:?}",
            s.id(),
            name,
            s.material().color
        );
    }
    match scene.world.light() {
        Some(l) => info!("light at {:?}, intensity {:?}", l.position, l.intensity),
        None => info!("no light; everything renders black"),
    }

    // ── parallel render ───────────────────────────────────────────────────
    let bar = if !opt.quiet {
        let pb = ProgressBar::new(height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
                .context("progress bar template")?,
        );
        Some(pb)
    } else {
        info!("rendering {width}x{height} (quiet mode)");
        None
    };

    let canvas = render_with_progress(&scene.view, &scene.world, || {
        if let Some(b) = &bar {
            b.inc(1);
        }
    });

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }

    // ── write ─────────────────────────────────────────────────────────────
    let name = opt
        .output
        .unwrap_or_else(|| PathBuf::from(render_image_name(width, height, "ppm")));
    if let Some(dir) = name.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let is_ppm = name
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        fs::write(&name, canvas.to_ppm()).with_context(|| format!("writing {}", name.display()))?;
    } else {
        canvas
            .to_rgb_image()
            .save(&name)
            .with_context(|| format!("writing {}", name.display()))?;
    }

    info!("saved → {}", name.display());
    Ok(())
}
