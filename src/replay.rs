//! Scripted input for headless runs.
//!
//! An input script is a JSON list of segments, each holding a set of keys for
//! a number of frames:
//!
//! ```json
//! [
//!     { "frames": 30, "right": true },
//!     { "frames": 1, "right": true, "jump": true },
//!     { "frames": 45 }
//! ]
//! ```
//!
//! Missing keys are released. Frames past the end of the script have no input.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::resources::input::FrameInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySegment {
    pub frames: u64,
    #[serde(flatten)]
    pub input: FrameInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub segments: Vec<ReplaySegment>,
}

impl InputScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a JSON input script from a file path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let script = Self::from_json(&content)?;
        Ok(script)
    }

    /// Number of frames the script covers.
    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| s.frames).sum()
    }

    /// Keys held on the zero-based `frame`.
    pub fn input_for_frame(&self, frame: u64) -> FrameInput {
        let mut start = 0;
        for segment in &self.segments {
            if frame < start + segment.frames {
                return segment.input;
            }
            start += segment.frames;
        }
        FrameInput::default()
    }
}
