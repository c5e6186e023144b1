use regex::Regex;
use std::backtrace::Backtrace;

use crate::errors::InternalError;

/// Symbol prefixes identifying flightrec's own frames.
const INTERNAL_MARKERS: &[&str] = &["flightrec_core", "flightrec_hub"];

/// Captures the current call stack as text, synchronously.
///
/// The leading frames are trimmed so the recorder's own internals never
/// appear in the result. If `anchor` is given, every frame up to and
/// including the last one whose symbol contains `anchor` is dropped
/// instead, letting a caller exclude its own adapter frames as well.
///
/// # Errors
///
/// Returns [`InternalError::TraceCapture`] if capture produced no usable
/// text at all.
pub fn capture(anchor: Option<&str>) -> Result<String, InternalError> {
    let raw = Backtrace::force_capture().to_string();
    if raw.trim().is_empty() {
        return Err(InternalError::TraceCapture);
    }
    Ok(trim_frames(&raw, anchor))
}

/// Trims leading frames from backtrace text.
///
/// A frame starts at a line matching `^\s*\d+:` and spans any indented
/// location lines that follow. With an anchor, the cut is after the last
/// frame whose text contains the anchor; without one, the cut is before
/// the first frame that does not belong to flightrec itself. If the cut
/// would discard every frame, the text is returned untrimmed.
pub fn trim_frames(text: &str, anchor: Option<&str>) -> String {
    let frames = split_frames(text);
    if frames.is_empty() {
        return text.to_string();
    }

    let cut = match anchor {
        Some(a) => frames
            .iter()
            .rposition(|f| f.contains(a))
            .map(|i| i + 1)
            .unwrap_or_else(|| internal_cut(&frames)),
        None => internal_cut(&frames),
    };

    if cut == 0 || cut >= frames.len() {
        return text.to_string();
    }
    frames[cut..].join("\n")
}

/// Index just past the last of flightrec's own frames.
///
/// Cutting after the last internal frame also removes the capture
/// machinery's frames sitting above it.
fn internal_cut(frames: &[String]) -> usize {
    frames
        .iter()
        .rposition(|f| INTERNAL_MARKERS.iter().any(|m| f.contains(m)))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Splits backtrace text into per-frame chunks.
fn split_frames(text: &str) -> Vec<String> {
    let header = Regex::new(r"^\s*\d+: ").expect("invalid regex");
    let mut frames: Vec<String> = Vec::new();

    for line in text.lines() {
        if header.is_match(line) {
            frames.push(line.to_string());
        } else if let Some(last) = frames.last_mut() {
            last.push('\n');
            last.push_str(line);
        }
        // Lines before the first header are not frames; skip them.
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   0: std::backtrace::Backtrace::force_capture\n             at library/std/src/backtrace.rs:313:9\n   1: flightrec_core::trace::capture\n             at crates/flightrec-core/src/trace.rs:20:15\n   2: flightrec_hub::event::Event::new\n             at crates/flightrec-hub/src/event.rs:80:21\n   3: my_adapter::forward\n             at src/adapter.rs:12:9\n   4: my_app::main\n             at src/main.rs:4:5\n";

    #[test]
    fn test_trims_internal_and_capture_frames() {
        let trimmed = trim_frames(SAMPLE, None);
        assert!(trimmed.starts_with("   3: my_adapter::forward"));
        assert!(trimmed.contains("my_app::main"));
        assert!(!trimmed.contains("flightrec_core"));
        assert!(!trimmed.contains("flightrec_hub"));
        assert!(!trimmed.contains("force_capture"));
    }

    #[test]
    fn test_anchor_cuts_through_caller_frames() {
        let trimmed = trim_frames(SAMPLE, Some("my_adapter::forward"));
        assert!(trimmed.starts_with("   4: my_app::main"));
        assert!(!trimmed.contains("my_adapter"));
    }

    #[test]
    fn test_unknown_anchor_falls_back_to_internal_trim() {
        let trimmed = trim_frames(SAMPLE, Some("no_such_symbol"));
        assert!(trimmed.starts_with("   3: my_adapter::forward"));
    }

    #[test]
    fn test_all_internal_frames_kept_untrimmed() {
        let text = "   0: flightrec_core::trace::capture\n   1: flightrec_hub::event::Event::new\n";
        assert_eq!(trim_frames(text, None), text);
    }

    #[test]
    fn test_non_frame_text_kept_as_is() {
        let text = "not a backtrace";
        assert_eq!(trim_frames(text, None), text);
    }

    #[test]
    fn test_anchor_matching_last_frame_keeps_text() {
        // Cutting after the final frame would discard everything.
        let trimmed = trim_frames(SAMPLE, Some("my_app::main"));
        assert_eq!(trimmed, SAMPLE);
    }
}
