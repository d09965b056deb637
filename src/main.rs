use std::io::Write;

use anyhow::Result;
use casteljau_viz::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use casteljau_viz::draw::svg::SvgCanvas;
use casteljau_viz::input::{InputEvent, InteractionMapper, Layout};
use casteljau_viz::{Point, Visualizer};
use clap::Parser;

/// Bézier curve snapshot
/// Places control points, plays the de Casteljau animation for a number of frames
/// and prints the last frame as svg to standard output.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CommandLineArguments {
    /// Control point as `X,Y` (repeatable, defaults to a sample curve)
    #[arg(short, long = "point", value_parser = parse_point)]
    points: Vec<Point>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 30)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
    fps: f32,

    /// Animation speed, parameter units per second
    #[arg(short, long)]
    speed: Option<f32>,

    /// Width of the drawing area
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: f32,

    /// Height of the drawing area
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: f32,

    /// Don't start the animation, only show the control chain
    #[arg(long)]
    paused: bool,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{}`", value))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn parse_fps(value: &str) -> Result<f32, String> {
    let fps = value.trim().parse::<f32>().map_err(|e| e.to_string())?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("frame rate must be a positive number, got `{}`", value))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let arguments = CommandLineArguments::parse();
    log::info!("casteljau-viz v{}", env!("CARGO_PKG_VERSION"));

    let points = if arguments.points.is_empty() {
        vec![
            Point::new(120.0, 520.0),
            Point::new(180.0, 120.0),
            Point::new(540.0, 140.0),
            Point::new(600.0, 500.0),
        ]
    } else {
        arguments.points
    };

    let mapper = InteractionMapper::new(Layout::new(arguments.width, arguments.height));
    let mut visualizer = Visualizer::new();
    if let Some(speed) = arguments.speed {
        visualizer.animation_mut().set_speed(speed);
    }
    // Go through the mapper like a click would, so points on the button strip are dropped
    for point in points {
        match mapper.map(InputEvent::PointerPressed(point)) {
            Some(command) => visualizer.apply(command),
            None => log::warn!("Ignoring ({}, {}): inside the button strip", point.x, point.y),
        }
    }
    if !arguments.paused {
        visualizer.animation_mut().play();
    }

    let elapsed = 1.0 / arguments.fps;
    let mut svg = SvgCanvas::new(arguments.width, arguments.height);
    if arguments.frames == 0 {
        visualizer.draw(&mut svg);
    }
    for _ in 0..arguments.frames {
        svg = SvgCanvas::new(arguments.width, arguments.height);
        visualizer.frame(elapsed, &mut svg);
    }
    log::info!(
        "Simulated {} frames, t = {}, {} trace points",
        arguments.frames,
        visualizer.animation().parameter(),
        visualizer.trace().len()
    );

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    write!(stdout, "{}", svg)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_must_be_positive_and_finite() {
        assert_eq!(parse_fps("30"), Ok(30.0));
        assert_eq!(parse_fps(" 59.94 "), Ok(59.94));
        for value in ["0", "-5", "-0", "inf", "NaN", "abc", ""] {
            assert!(parse_fps(value).is_err(), "{:?} was accepted", value);
        }
    }

    #[test]
    fn points_are_comma_separated() {
        assert_eq!(parse_point("100, 200.5"), Ok(Point::new(100.0, 200.5)));
        assert!(parse_point("100").is_err());
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn default_fps_parses() {
        let arguments = CommandLineArguments::try_parse_from(["casteljau-viz"]).unwrap();
        assert_eq!(arguments.fps, 60.0);
        assert!(CommandLineArguments::try_parse_from(["casteljau-viz", "--fps", "0"]).is_err());
    }
}
