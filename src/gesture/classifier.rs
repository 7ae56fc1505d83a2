//! Gesture filter and classifier
//!
//! Turns one detection tick's raw keypoints into a MovementState,
//! suppressing anatomically implausible or low-confidence wrist
//! detections. Pure per-tick computation: all temporal memory lives in
//! the calibration counter and the effect cooldowns.

use crate::bridge::pose::{
    Keypoint, PoseFrame, KEYPOINT_COUNT, LEFT_EAR, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_EAR,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Minimum confidence for the head reference (nose, or each ear of a pair)
const HEAD_SCORE_THRESHOLD: f32 = 0.3;

/// Wrists at or below this confidence are discarded outright
const WRIST_SCORE_FLOOR: f32 = 0.25;

/// Two wrists closer than this are treated as one double-detection
const PROXIMITY_LIMIT: f32 = 50.0;

/// Fraction of frame height forming the top and bottom extreme bands
const EXTREME_BAND: f32 = 0.15;

/// Distance from a frame edge inside which detections are suspect
const EDGE_MARGIN: f32 = 10.0;

/// Edge-adjacent detections below this confidence are dropped
const EDGE_SCORE_THRESHOLD: f32 = 0.4;

/// A wrist must sit this many pixels above the head reference to be raised
const RAISE_MARGIN: f32 = 20.0;

/// Shoulder confidence floor for the body-movement magnitude
const SHOULDER_SCORE_THRESHOLD: f32 = 0.3;

/// Per-tick movement classification.
///
/// The `*_detected` flags carry the "wrist present but not raised" signal
/// separately from the raised flags; callers that want any-presence
/// semantics can OR the two themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementState {
    pub left_hand_raised: bool,
    pub right_hand_raised: bool,
    pub left_hand_detected: bool,
    pub right_hand_detected: bool,
    pub both_hands_up: bool,
    /// Coarse body-movement magnitude in [0, 1] from shoulder spread
    pub body_movement: f32,
}

/// Classify one frame of keypoints. Deterministic: identical input yields
/// identical output.
pub fn classify(frame: &PoseFrame) -> MovementState {
    if !frame.present {
        return MovementState::default();
    }

    let kp = &frame.keypoints;
    let head_y = head_reference_y(kp);

    let mut left = confident_wrist(kp[LEFT_WRIST]);
    let mut right = confident_wrist(kp[RIGHT_WRIST]);

    // Cross-wrist plausibility checks only apply when both survived
    if let (Some(l), Some(r)) = (left, right) {
        let distance = ((l.x - r.x).powi(2) + (l.y - r.y).powi(2)).sqrt();
        if distance < PROXIMITY_LIMIT {
            // Double-detection of one hand: keep the higher confidence,
            // left wins ties
            if l.score >= r.score {
                right = None;
            } else {
                left = None;
            }
        } else {
            let top = frame.video_height * EXTREME_BAND;
            let bottom = frame.video_height * (1.0 - EXTREME_BAND);
            let opposite_extremes =
                (l.y < top && r.y > bottom) || (r.y < top && l.y > bottom);
            if opposite_extremes {
                if l.score >= r.score {
                    right = None;
                } else {
                    left = None;
                }
            }
        }
    }

    left = left.filter(|w| !is_edge_artifact(w, frame.video_width, frame.video_height));
    right = right.filter(|w| !is_edge_artifact(w, frame.video_width, frame.video_height));

    let raised = |wrist: Option<Keypoint>| match (wrist, head_y) {
        (Some(w), Some(head)) => w.score > WRIST_SCORE_FLOOR && w.y < head - RAISE_MARGIN,
        _ => false,
    };

    let left_hand_raised = raised(left);
    let right_hand_raised = raised(right);

    MovementState {
        left_hand_raised,
        right_hand_raised,
        left_hand_detected: left.is_some() && !left_hand_raised,
        right_hand_detected: right.is_some() && !right_hand_raised,
        both_hands_up: left_hand_raised && right_hand_raised,
        body_movement: shoulder_spread(kp, frame.video_width),
    }
}

/// Head reference Y: nose when confident, else the ear-pair average,
/// else none (no raise classification possible)
fn head_reference_y(kp: &[Keypoint; KEYPOINT_COUNT]) -> Option<f32> {
    let nose = kp[NOSE];
    if nose.score > HEAD_SCORE_THRESHOLD {
        return Some(nose.y);
    }
    let (left_ear, right_ear) = (kp[LEFT_EAR], kp[RIGHT_EAR]);
    if left_ear.score > HEAD_SCORE_THRESHOLD && right_ear.score > HEAD_SCORE_THRESHOLD {
        return Some((left_ear.y + right_ear.y) / 2.0);
    }
    None
}

fn confident_wrist(wrist: Keypoint) -> Option<Keypoint> {
    (wrist.score > WRIST_SCORE_FLOOR).then_some(wrist)
}

/// Edge artifacts tend to be low-confidence: drop wrists hugging a frame
/// edge unless the detector is fairly sure about them
fn is_edge_artifact(wrist: &Keypoint, width: f32, height: f32) -> bool {
    let near_edge = wrist.x < EDGE_MARGIN
        || wrist.x > width - EDGE_MARGIN
        || wrist.y < EDGE_MARGIN
        || wrist.y > height - EDGE_MARGIN;
    near_edge && wrist.score < EDGE_SCORE_THRESHOLD
}

/// Shoulder spread as a fraction of frame width, 0 when either shoulder
/// is unreliable
fn shoulder_spread(kp: &[Keypoint; KEYPOINT_COUNT], width: f32) -> f32 {
    let (left, right) = (kp[LEFT_SHOULDER], kp[RIGHT_SHOULDER]);
    if left.score > SHOULDER_SCORE_THRESHOLD && right.score > SHOULDER_SCORE_THRESHOLD {
        ((left.x - right.x).abs() / width).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame with the given (index, x, y, score) keypoints set
    fn frame_with(points: &[(usize, f32, f32, f32)]) -> PoseFrame {
        let mut frame = PoseFrame::empty(320.0, 240.0);
        frame.present = true;
        for &(index, x, y, score) in points {
            frame.keypoints[index] = Keypoint { x, y, score };
        }
        frame
    }

    #[test]
    fn absent_body_yields_default_state() {
        let frame = PoseFrame::empty(320.0, 240.0);
        assert_eq!(classify(&frame), MovementState::default());
    }

    #[test]
    fn no_head_reference_means_no_raises() {
        // Confident wrist well above where a head would be, but neither
        // nose nor ear pair is trustworthy
        let frame = frame_with(&[
            (NOSE, 160.0, 80.0, 0.1),
            (LEFT_EAR, 150.0, 80.0, 0.4),
            (LEFT_WRIST, 160.0, 30.0, 0.9),
        ]);
        let state = classify(&frame);
        assert!(!state.left_hand_raised);
        assert!(!state.right_hand_raised);
        // The wrist itself still counts as detected
        assert!(state.left_hand_detected);
    }

    #[test]
    fn ear_pair_substitutes_for_nose() {
        let frame = frame_with(&[
            (LEFT_EAR, 150.0, 80.0, 0.5),
            (RIGHT_EAR, 170.0, 84.0, 0.5),
            (LEFT_WRIST, 160.0, 30.0, 0.9),
        ]);
        // headY = 82, wrist at 30 < 62
        assert!(classify(&frame).left_hand_raised);
    }

    #[test]
    fn close_wrists_keep_only_the_higher_confidence() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 160.0, 40.0, 0.5),
            (RIGHT_WRIST, 180.0, 40.0, 0.8),
        ]);
        let state = classify(&frame);
        assert!(!state.left_hand_raised);
        assert!(state.right_hand_raised);
    }

    #[test]
    fn close_wrist_tie_breaks_to_left() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 160.0, 40.0, 0.6),
            (RIGHT_WRIST, 180.0, 40.0, 0.6),
        ]);
        let state = classify(&frame);
        assert!(state.left_hand_raised);
        assert!(!state.right_hand_raised);
    }

    #[test]
    fn raise_threshold_is_strict() {
        // Exactly at headY - 20: not raised
        let at_threshold = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 100.0, 80.0, 0.9),
        ]);
        assert!(!classify(&at_threshold).left_hand_raised);

        // One pixel above: raised
        let above = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 100.0, 79.0, 0.9),
        ]);
        assert!(classify(&above).left_hand_raised);
    }

    #[test]
    fn opposite_vertical_extremes_keep_higher_confidence() {
        // Left in the top 15% band, right in the bottom 15% band
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 100.0, 20.0, 0.6),
            (RIGHT_WRIST, 250.0, 230.0, 0.4),
        ]);
        let state = classify(&frame);
        assert!(state.left_hand_raised);
        assert!(!state.right_hand_raised);
        assert!(!state.right_hand_detected);
    }

    #[test]
    fn low_confidence_edge_detection_is_dropped() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 5.0, 40.0, 0.3),
        ]);
        let state = classify(&frame);
        assert!(!state.left_hand_raised);
        assert!(!state.left_hand_detected);
    }

    #[test]
    fn confident_edge_detection_survives() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 5.0, 40.0, 0.5),
        ]);
        assert!(classify(&frame).left_hand_raised);
    }

    #[test]
    fn detected_is_separate_from_raised() {
        // Wrist below the head: detected, not raised, never OR-ed together
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 100.0, 150.0, 0.9),
        ]);
        let state = classify(&frame);
        assert!(!state.left_hand_raised);
        assert!(state.left_hand_detected);
    }

    #[test]
    fn both_hands_up_requires_both_raised() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 60.0, 40.0, 0.9),
            (RIGHT_WRIST, 260.0, 50.0, 0.9),
        ]);
        let state = classify(&frame);
        assert!(state.both_hands_up);
    }

    #[test]
    fn body_movement_tracks_shoulder_spread() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_SHOULDER, 120.0, 140.0, 0.8),
            (RIGHT_SHOULDER, 248.0, 140.0, 0.8),
        ]);
        let state = classify(&frame);
        assert!((state.body_movement - 0.4).abs() < 1e-6);
    }

    #[test]
    fn classification_is_deterministic() {
        let frame = frame_with(&[
            (NOSE, 160.0, 100.0, 0.9),
            (LEFT_WRIST, 60.0, 40.0, 0.9),
        ]);
        assert_eq!(classify(&frame), classify(&frame));
    }
}
