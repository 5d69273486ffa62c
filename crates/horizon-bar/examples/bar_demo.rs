//! Headless bar walk-through.
//!
//! Drives a bar with a manual clock at 60 Hz through a few value changes,
//! switching orientation, easing curve and animation along the way, and
//! prints the fill rectangle as it moves.
//!
//! Run with: cargo run -p horizon-bar --example bar_demo
//!
//! Set `RUST_LOG=horizon_bar=trace` to see every tick.

use std::sync::Arc;
use std::time::Duration;

use horizon_bar::{Bar, Color, Easing, ManualClock, Orientation, Rect, RecordingPainter};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);

fn run_until_idle(bar: &mut Bar, clock: &ManualClock) {
    let mut frame = 0;
    while bar.is_animating() {
        clock.advance(FRAME);
        bar.tick();
        frame += 1;
        if frame % 15 == 0 || !bar.is_animating() {
            let fill = bar.rects().fill;
            println!(
                "  frame {frame:3}  displayed {:6.2}  fill x={:6.1} y={:6.1} w={:6.1} h={:6.1}",
                bar.displayed_value(),
                fill.left(),
                fill.bottom(),
                fill.width(),
                fill.height(),
            );
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Horizon Bar demo");
    println!("================");
    println!();

    let clock = Arc::new(ManualClock::new());
    let mut bar = Bar::with_clock(clock.clone())
        .with_geometry(Rect::new(0.0, 0.0, 40.0, 200.0))
        .with_color(Color::from_rgba(1.0, 0.2, 0.3, 1.0))
        .with_animation_duration(Duration::from_secs(1))
        .with_value(30.0);

    bar.value_changed.connect(|value| {
        tracing::info!("Value changed to: {value}");
    });

    println!("Bottom to top, linear: 30 -> 70");
    bar.set_value(70.0);
    run_until_idle(&mut bar, &clock);

    println!("Left to right, in_back: 70 -> 10");
    bar.set_orientation(Orientation::LeftToRight);
    bar.set_geometry(Rect::new(0.0, 0.0, 200.0, 40.0));
    bar.set_animation_kind(Easing::InBack);
    bar.set_value(10.0);
    run_until_idle(&mut bar, &clock);

    println!("Right to left, out_elastic: 10 -> 90");
    bar.set_orientation(Orientation::RightToLeft);
    if let Err(e) = bar.set_animation_kind_name("out_elastic") {
        println!("  {e}");
    }
    bar.set_value(90.0);
    run_until_idle(&mut bar, &clock);

    println!("Top to bottom, in_out_expo, retargeted halfway: 90 -> 20 -> 60");
    bar.set_orientation(Orientation::TopToBottom);
    bar.set_geometry(Rect::new(0.0, 0.0, 40.0, 200.0));
    bar.set_animation_kind(Easing::InOutExpo);
    bar.set_value(20.0);
    for _ in 0..30 {
        clock.advance(FRAME);
        bar.tick();
    }
    println!("  retarget at displayed {:.2}", bar.displayed_value());
    bar.set_value(60.0);
    run_until_idle(&mut bar, &clock);

    println!("Animation off: 60 -> 50");
    bar.set_animated(false);
    bar.set_value(50.0);
    println!("  displayed {:.2}", bar.displayed_value());

    println!("Unknown orientation name is rejected:");
    if let Err(e) = bar.set_orientation_name("diagonal") {
        println!("  {e} (kept {})", bar.orientation());
    }

    let mut painter = RecordingPainter::new();
    bar.paint(&mut painter);
    println!();
    println!("Final paint commands:");
    for command in painter.commands() {
        println!("  {command:?}");
    }
}
