use dioxus::prelude::*;
use gloo_timers::callback::Interval;

const TICK_MS: u32 = 50;
// Periods in ticks: the left blob drifts over ~6s, the right over ~8s.
const SLOW_PERIOD: f32 = 120.0;
const FAST_PERIOD: f32 = 160.0;
const DRIFT_PX: f32 = 15.0;

/// Blurred background blobs drifting up and down behind the content.
/// Purely decorative: the interval is fire-and-forget and nothing ever
/// awaits or cancels it.
#[component]
pub fn FloatingShapes() -> Element {
    let mut phase = use_signal(|| 0u32);

    use_hook(|| {
        Interval::new(TICK_MS, move || {
            phase.with_mut(|p| *p = p.wrapping_add(1));
        })
        .forget();
    });

    let t = *phase.read() as f32 * std::f32::consts::TAU;
    let slow = DRIFT_PX * (1.0 - (t / SLOW_PERIOD).cos());
    let fast = -DRIFT_PX * (1.0 - (t / FAST_PERIOD).cos());

    rsx! {
        div {
            class: "absolute top-20 left-10 w-40 h-40 bg-purple-500/20 rounded-full blur-3xl",
            style: "transform: translateY({slow}px)",
        }
        div {
            class: "absolute bottom-20 right-10 w-60 h-60 bg-blue-500/20 rounded-full blur-3xl",
            style: "transform: translateY({fast}px)",
        }
    }
}
