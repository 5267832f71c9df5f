use console::Style;
use vitrine_core::clock::Clock;
use vitrine_core::host::{PointerCapture, ViewerHost};
use vitrine_core::track::{Card, DragOutcome, SlideTrack};
use vitrine_core::viewer::MediaViewport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    action: Style,
    closed: Style,
    time: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            action: Style::new().green(),
            closed: Style::new().dim().yellow(),
            time: Style::new().dim(),
        }
    }
}

pub fn print_layout<T: Card, C: Clock, P: PointerCapture>(width: f32, track: &SlideTrack<T, C, P>) {
    let s = Styles::new();
    let layout = track.layout();

    println!();
    println!("  {}", s.title.apply_to("Carousel Layout"));
    println!();
    println!("  {:<16}{}", s.label.apply_to("Viewport"), s.value.apply_to(format!("{width:.0} px")));
    println!("  {:<16}{}", s.label.apply_to("Cards"), s.value.apply_to(track.len()));
    println!(
        "  {:<16}{}",
        s.label.apply_to("Items per view"),
        s.value.apply_to(track.items_per_view())
    );
    println!("  {:<16}{}", s.label.apply_to("Max index"), s.value.apply_to(track.max_index()));
    println!("  {:<16}{}", s.label.apply_to("Positions"), s.value.apply_to(track.positions()));
    println!(
        "  {:<16}{}",
        s.label.apply_to("Card width"),
        s.value.apply_to(format!("{:.1} px", layout.card_width))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Stride"),
        s.value.apply_to(format!("{:.1} px", layout.stride))
    );
    println!();
}

pub fn print_header(title: &str) {
    let s = Styles::new();
    println!();
    println!("  {}", s.title.apply_to(title));
    println!();
}

/// One line per replayed step: time, action, viewer state, track state.
pub fn print_step<H, C, T, TC, P>(
    now_ms: u64,
    action: &str,
    viewer: &MediaViewport<H, C>,
    track: &SlideTrack<T, TC, P>,
    outcome: Option<DragOutcome>,
) where
    H: ViewerHost,
    C: Clock,
    T: Card,
    TC: Clock,
    P: PointerCapture,
{
    let s = Styles::new();

    let viewer_text = match (viewer.state(), viewer.counter()) {
        (Some(state), Some((pos, total))) => s
            .value
            .apply_to(format!(
                "{} {pos}/{total} zoom {:.2} pan ({:.1}, {:.1}){}",
                viewer.phase(),
                state.zoom_level,
                state.pan_offset.x,
                state.pan_offset.y,
                if state.is_fullscreen { " fullscreen" } else { "" }
            ))
            .to_string(),
        _ => s.closed.apply_to("closed").to_string(),
    };

    let outcome_text = match outcome {
        Some(DragOutcome::Tap) => " tap".to_string(),
        Some(DragOutcome::SnapBack) => " snap-back".to_string(),
        Some(DragOutcome::Committed(d)) => format!(" commit {d}"),
        None => String::new(),
    };

    println!(
        "  {:>8}  {:<22} {} {}  {} {}{}",
        s.time.apply_to(format!("{now_ms}ms")),
        s.action.apply_to(action),
        s.label.apply_to("viewer"),
        viewer_text,
        s.label.apply_to("track"),
        s.value.apply_to(format!(
            "{}/{} x{}",
            track.active_index(),
            track.max_index(),
            track.items_per_view()
        )),
        outcome_text,
    );
}
