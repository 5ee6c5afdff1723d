use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use serde::{Deserialize, Serialize};

use spacing_core::config::Config;
use spacing_core::recording::{ElementSpec, OverlayCall, RecordingHost};
use spacing_core::{InputEvent, Spacing};

/// Arguments for the `replay` subcommand.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON trace with `elements` and timestamped `steps`
    trace: PathBuf,
    /// Call stop() after the last step
    #[arg(long)]
    stop: bool,
    /// Print the overlay calls as JSON
    #[arg(long)]
    json: bool,
}

/// A scripted page plus the input recorded against it.
#[derive(Debug, Deserialize)]
pub struct Trace {
    pub elements: Vec<ElementSpec>,
    pub steps: Vec<Step>,
}

/// One timestamped input. A step without an event only advances time.
#[derive(Debug, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(default)]
    pub event: Option<InputEvent>,
}

/// What the overlay did in response to one step.
#[derive(Debug, Serialize)]
pub struct StepOutput {
    pub at_ms: u64,
    pub step: String,
    pub calls: Vec<OverlayCall>,
}

pub fn execute(args: &ReplayArgs, config: Config) {
    let content = match std::fs::read_to_string(&args.trace) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: could not read {}: {e}", args.trace.display());
            std::process::exit(1);
        }
    };
    let trace: Trace = match serde_json::from_str(&content) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: invalid trace {}: {e}", args.trace.display());
            std::process::exit(1);
        }
    };

    let outputs = run(trace, config, args.stop);

    if args.json {
        match serde_json::to_string_pretty(&outputs) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }
    for out in &outputs {
        println!("[{:>6}ms] {}", out.at_ms, out.step);
        for call in &out.calls {
            println!("           {call}");
        }
    }
}

/// Drives a fresh tool over the trace and collects the calls per step.
pub fn run(trace: Trace, config: Config, stop_at_end: bool) -> Vec<StepOutput> {
    let mut spacing = Spacing::new(RecordingHost::with_elements(trace.elements), config);
    spacing.start();

    let mut outputs = vec![StepOutput {
        at_ms: 0,
        step: "start".into(),
        calls: spacing.host_mut().take_calls(),
    }];
    let mut last_ms = 0;

    for step in trace.steps {
        let now = Duration::from_millis(step.at_ms);
        last_ms = step.at_ms;
        let label = match &step.event {
            Some(event) => {
                spacing.handle(event, now);
                event.to_string()
            }
            None => {
                spacing.tick(now);
                "tick".into()
            }
        };
        outputs.push(StepOutput {
            at_ms: step.at_ms,
            step: label,
            calls: spacing.host_mut().take_calls(),
        });
    }

    if stop_at_end {
        spacing.stop();
        outputs.push(StepOutput {
            at_ms: last_ms,
            step: "stop".into(),
            calls: spacing.host_mut().take_calls(),
        });
    }
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = r#"{
        "elements": [
            {"id": 1, "tag": "section", "rect": {"top": 0, "left": 0, "width": 200, "height": 200}},
            {"id": 2, "class": "item", "rect": {"top": 50, "left": 50, "width": 20, "height": 20}}
        ],
        "steps": [
            {"at_ms": 0, "event": {"type": "pointer_moved", "path": [1]}},
            {"at_ms": 10, "event": {"type": "key_down", "key": "Alt", "shift": true}},
            {"at_ms": 20, "event": {"type": "pointer_moved", "path": [2, 1]}},
            {"at_ms": 30, "event": {"type": "key_up", "key": "Alt"}},
            {"at_ms": 3030}
        ]
    }"#;

    fn trace() -> Trace {
        serde_json::from_str(TRACE).unwrap()
    }

    #[test]
    fn replay_draws_marks_then_dismisses_after_grace() {
        // Act
        let outputs = run(trace(), Config::default(), false);

        // Assert
        assert_eq!(outputs[0].calls, [OverlayCall::AttachListeners]);
        let marks = outputs[3]
            .calls
            .iter()
            .filter(|c| matches!(c, OverlayCall::DrawMark { .. }))
            .count();
        assert_eq!(marks, 4);
        assert!(outputs[4].calls.is_empty(), "release should linger");
        assert!(
            outputs[5]
                .calls
                .contains(&OverlayCall::ScrollGuard { enabled: false })
        );
    }

    #[test]
    fn stop_at_end_detaches_listeners() {
        let outputs = run(trace(), Config::default(), true);

        let last = outputs.last().unwrap();
        assert_eq!(last.step, "stop");
        assert_eq!(last.calls[0], OverlayCall::DetachListeners);
    }
}
