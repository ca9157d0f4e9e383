//! card_session — scripted end-to-end demo of the rust_gaze engine.
//!
//! Replays one minute of a card-sorting study session: a participant sits
//! down, a second face drops by, the participant's head turns (responding
//! joint attention), and two cards are revealed (initiating joint attention
//! with the 2-second motor delay).  Decisions and a thinned gaze trace land
//! in `output/card_session/` as CSV; rendered eye positions get cosmetic
//! micro-saccade jitter at the sink, exactly where a pupil renderer would
//! apply it.
//!
//! A live deployment ticks at wall-clock rate (sleep `TICK_INTERVAL_MS` per
//! tick) and feeds real perception messages; the replay runs as fast as it
//! can.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use gaze_core::{EngineConfig, GazePoint, GazeRng, Millis, Side};
use gaze_engine::{parse_feed, Decision, DropReason, EngineBuilder, EngineObserver, GazeSink};
use gaze_motion::Microsaccades;
use gaze_output::{CsvLogWriter, DecisionLogObserver, LogWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const TICK_INTERVAL_MS: u32 = 50;   // ≈20 Hz
const SESSION_TICKS:    u64 = 1_200; // one minute
const CONDITION:        &str = "demo";

// ── Rendering sink ────────────────────────────────────────────────────────────

/// A render-side sink: layers micro-saccade jitter over the engine's point,
/// the way a pupil renderer keeps idle eyes alive.  The engine never sees
/// the jitter.
struct JitterSink {
    micro:    Microsaccades,
    rng:      GazeRng,
    now:      Millis,
    rendered: Vec<GazePoint>,
}

impl JitterSink {
    fn new(seed: u64) -> Self {
        Self {
            micro:    Microsaccades::new(0.03, 2.0, Millis::ZERO),
            rng:      GazeRng::new(seed),
            now:      Millis::ZERO,
            rendered: Vec::new(),
        }
    }
}

impl GazeSink for JitterSink {
    fn set_gaze(&mut self, x: f32, y: f32, _scale: f32) {
        self.micro.update(self.now, GazePoint::new(x, y), &mut self.rng);
        self.rendered.push(self.micro.position().clamped());
        self.now = self.now + TICK_INTERVAL_MS as u64;
    }
}

// ── Observer wrapper to narrate the session ───────────────────────────────────

struct NarratingObserver<W: LogWriter> {
    inner:     DecisionLogObserver<W>,
    switches:  Vec<(u64, &'static str)>,
    decisions: usize,
}

impl<W: LogWriter> NarratingObserver<W> {
    fn new(inner: DecisionLogObserver<W>) -> Self {
        Self { inner, switches: Vec::new(), decisions: 0 }
    }
}

impl<W: LogWriter> EngineObserver for NarratingObserver<W> {
    fn on_gaze(&mut self, now: Millis, point: GazePoint, scale: f32) {
        self.inner.on_gaze(now, point, scale);
    }

    fn on_behavior_start(&mut self, now: Millis, name: &'static str) {
        println!("  [{now}] behavior → {name}");
        self.switches.push((now.0, name));
    }

    fn on_decision(&mut self, decision: &Decision) {
        println!(
            "  [{}] decision: card {} → {} {}",
            decision.at,
            decision.card_id,
            decision.gaze_decision(),
            decision.reason(),
        );
        self.decisions += 1;
        self.inner.on_decision(decision);
    }

    fn on_trigger_dropped(&mut self, now: Millis, reason: DropReason) {
        println!("  [{now}] trigger dropped: {reason:?}");
    }
}

// ── Scripted feed ─────────────────────────────────────────────────────────────

/// The discrete perception/game events of the session, as raw feed JSON.
///
/// Mutual gaze runs until something supersedes it, so the multi-face and
/// head-turn windows are placed around the joint-attention gestures — the
/// idle moments after a gesture completes are when the scheduler re-selects.
fn scripted_event(tick: u64) -> Option<String> {
    let msg = match tick {
        // Participant sits down after one second → mutual gaze.
        20 => json!({
            "event": "faceDetection", "userInFront": true,
            "faceX": 0.42, "faceY": 0.48, "headDirection": "Looking Forward",
        }),
        // First card revealed at 10 s → initiating gaze two seconds later.
        200 => json!({
            "event": "cardReveal", "cardId": "card-01", "side": "left",
        }),
        // Duplicate reveal message (network retry) — must be ignored.
        210 => json!({
            "event": "cardReveal", "cardId": "card-01", "side": "left",
        }),
        // A second person leans into frame while the gesture runs; when it
        // completes (~14.6 s) the scheduler picks alternating gaze.
        280 => json!({
            "event": "faceDetection", "userInFront": true,
            "faceX": 0.40, "faceY": 0.48,
            "secondFaceX": 0.68, "secondFaceY": 0.45,
        }),
        // Second card at 25 s → initiating gaze supersedes the alternation.
        500 => json!({
            "event": "cardReveal", "cardId": "card-02", "side": "right",
        }),
        // The second person leaves mid-gesture…
        560 => json!({
            "event": "faceDetection", "userInFront": true,
            "faceX": 0.43, "faceY": 0.49,
        }),
        // …and the participant glances left just before it completes, so the
        // idle scheduler responds to the head turn (~29.6 s).
        585 => json!({
            "event": "faceDetection", "userInFront": true,
            "faceX": 0.43, "faceY": 0.49, "headDirection": "Looking Left",
        }),
        // Head back to neutral.
        700 => json!({
            "event": "faceDetection", "userInFront": true,
            "faceX": 0.44, "faceY": 0.50, "headDirection": "Looking Forward",
        }),
        // Participant leaves at 55 s; the eyes drift back to center.
        1_100 => json!({
            "event": "faceDetection", "userInFront": false,
        }),
        _ => return None,
    };
    Some(msg.to_string())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== card_session — rust_gaze demo ===");
    println!("Ticks: {SESSION_TICKS} ({} s)  |  Seed: {SEED}  |  Condition: {CONDITION}",
        SESSION_TICKS * TICK_INTERVAL_MS as u64 / 1_000);
    println!();

    // 1. Engine configuration and construction.
    let config = EngineConfig {
        tick_interval_ms: TICK_INTERVAL_MS,
        seed:             SEED,
        start_unix_ms:    1_700_000_000_000, // fixed reference instant
        condition:        CONDITION.into(),
        ..EngineConfig::default()
    };
    let mut engine = EngineBuilder::new(config.clone(), JitterSink::new(SEED ^ 1)).build()?;

    // 2. Decision log: CSV files, gaze trace thinned to 4 Hz.
    std::fs::create_dir_all("output/card_session")?;
    let writer = CsvLogWriter::new(Path::new("output/card_session"))?;
    let log = DecisionLogObserver::new(writer, &config).sample_every_ms(250);
    let mut obs = NarratingObserver::new(log);

    // 3. Replay the session tick by tick.
    for tick in 0..SESSION_TICKS {
        if let Some(raw) = scripted_event(tick) {
            match parse_feed(&raw) {
                Ok(event) => engine.apply_feed(event, &mut obs),
                Err(e) => eprintln!("feed message dropped: {e}"),
            }
        }
        // Operator presses the left-arrow key at 45 s.
        if tick == 900 {
            engine.trigger_initiating(Side::Left, &mut obs);
        }
        engine.tick(&mut obs);
    }

    // 4. Close the log and surface any write error.
    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Session summary.
    println!();
    println!("Session complete: {} behavior switches, {} decisions", obs.switches.len(), obs.decisions);
    println!("Final status: {}", engine.status());
    println!("Logs: output/card_session/decisions.csv, gaze_trace.csv");
    println!();

    // 6. Rendered horizontal gaze, one row per 2 s of session time.
    println!("Rendered gaze x (L ... R), micro-saccade jitter included:");
    let rendered = &engine.sink.rendered;
    for (i, point) in rendered.iter().enumerate().step_by(40) {
        let col = (point.x * 40.0).round() as usize;
        let mut strip = vec![b'-'; 41];
        strip[20] = b'|';
        strip[col.min(40)] = b'*';
        println!("{:>4}s  {}", i as u64 * TICK_INTERVAL_MS as u64 / 1_000, String::from_utf8(strip)?);
    }

    Ok(())
}
