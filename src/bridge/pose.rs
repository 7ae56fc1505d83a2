//! Pose upload and JS bridge
//!
//! Receives MoveNet keypoints from JavaScript once per detection tick and
//! fans them out to the classifier, the calibration counter and the
//! animation engine.

use wasm_bindgen::prelude::*;

use crate::animation;
use crate::gesture::classify;

// ============================================================================
// KEYPOINT INDICES (MoveNet SINGLEPOSE - 17 total)
// ============================================================================

// Only the indices the classifier and engine consume; the full MoveNet
// order runs nose, eyes, ears, shoulders, elbows, wrists, hips, knees,
// ankles (left before right).
pub const NOSE: usize = 0;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;

/// Total keypoints per detection
pub const KEYPOINT_COUNT: usize = 17;

/// Floats per keypoint in the upload buffer: x, y, score
pub const VALUES_PER_KEYPOINT: usize = 3;

/// Camera resolution assumed when the source does not report its own
pub const DEFAULT_CAMERA_WIDTH: f32 = 320.0;
pub const DEFAULT_CAMERA_HEIGHT: f32 = 240.0;

// ============================================================================
// POSE DATA STRUCTURES
// ============================================================================

/// A single named landmark in camera pixel space
#[derive(Clone, Copy, Default)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detection confidence in [0, 1]
    pub score: f32,
}

/// One detection tick's worth of keypoints plus the camera frame they live in
#[derive(Clone)]
pub struct PoseFrame {
    pub keypoints: [Keypoint; KEYPOINT_COUNT],
    /// False when no body was detected this tick
    pub present: bool,
    pub video_width: f32,
    pub video_height: f32,
}

impl PoseFrame {
    /// Frame with no detected body
    pub fn empty(video_width: f32, video_height: f32) -> Self {
        Self {
            keypoints: [Keypoint::default(); KEYPOINT_COUNT],
            present: false,
            video_width: sanitize_dimension(video_width, DEFAULT_CAMERA_WIDTH),
            video_height: sanitize_dimension(video_height, DEFAULT_CAMERA_HEIGHT),
        }
    }
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self::empty(DEFAULT_CAMERA_WIDTH, DEFAULT_CAMERA_HEIGHT)
    }
}

fn sanitize_dimension(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Decode the flat upload buffer into a frame. Empty input means "no body";
/// any other length mismatch is rejected.
fn parse_frame(data: &[f32], video_width: f32, video_height: f32) -> Result<PoseFrame, usize> {
    if data.is_empty() {
        return Ok(PoseFrame::empty(video_width, video_height));
    }
    if data.len() != KEYPOINT_COUNT * VALUES_PER_KEYPOINT {
        return Err(data.len());
    }

    let mut frame = PoseFrame::empty(video_width, video_height);
    for i in 0..KEYPOINT_COUNT {
        frame.keypoints[i] = Keypoint {
            x: data[i * VALUES_PER_KEYPOINT],
            y: data[i * VALUES_PER_KEYPOINT + 1],
            score: data[i * VALUES_PER_KEYPOINT + 2],
        };
    }
    frame.present = true;
    Ok(frame)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per detection tick with a flat Float32Array of
/// 51 values (17 keypoints x [x, y, score]) in camera pixel space, or an
/// empty array when no body was detected. `now_ms` is `performance.now()`.
///
/// The host must not queue ticks: if a previous inference call has not
/// completed when the next tick fires, skip the tick instead.
#[wasm_bindgen]
pub fn update_pose(data: &[f32], video_width: f32, video_height: f32, now_ms: f64) {
    let frame = match parse_frame(data, video_width, video_height) {
        Ok(frame) => frame,
        Err(len) => {
            web_sys::console::warn_1(
                &format!(
                    "Invalid pose data length: {} (expected {} or 0)",
                    len,
                    KEYPOINT_COUNT * VALUES_PER_KEYPOINT
                )
                .into(),
            );
            PoseFrame::empty(video_width, video_height)
        }
    };

    let movement = classify(&frame);

    let playing = super::session::with(|session| {
        session.calibration.update(&movement, now_ms);
        if movement.left_hand_raised || movement.right_hand_raised {
            session.last_movement_ms = Some(now_ms);
        }
        session.last_movement = movement;
        session.playing
    });

    animation::with_engine(|engine| {
        // Cursor presence tracks detection even while paused; only effect
        // triggers are gated by the play flag.
        engine.update_cursor_targets(&frame);
        if playing {
            engine.apply_movement(&movement, &frame, now_ms);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_upload_is_an_absent_frame() {
        let frame = parse_frame(&[], 320.0, 240.0).unwrap();
        assert!(!frame.present);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(parse_frame(&[1.0; 50], 320.0, 240.0), Err(50)));
    }

    #[test]
    fn full_upload_decodes_in_movenet_order() {
        let mut data = vec![0.0f32; KEYPOINT_COUNT * VALUES_PER_KEYPOINT];
        data[LEFT_WRIST * VALUES_PER_KEYPOINT] = 120.0;
        data[LEFT_WRIST * VALUES_PER_KEYPOINT + 1] = 60.0;
        data[LEFT_WRIST * VALUES_PER_KEYPOINT + 2] = 0.9;

        let frame = parse_frame(&data, 320.0, 240.0).unwrap();
        assert!(frame.present);
        let wrist = frame.keypoints[LEFT_WRIST];
        assert_eq!((wrist.x, wrist.y), (120.0, 60.0));
        assert!((wrist.score - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn bad_dimensions_fall_back_to_defaults() {
        let frame = PoseFrame::empty(0.0, f32::NAN);
        assert_eq!(frame.video_width, DEFAULT_CAMERA_WIDTH);
        assert_eq!(frame.video_height, DEFAULT_CAMERA_HEIGHT);
    }
}
