//! Presentation options shared between configuration and the renderer.

use serde::{Deserialize, Serialize};

/// User-facing rendering preferences.
///
/// These only affect how the simulator draws the panel; the controller's
/// outputs are identical regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Draw segments with plain ASCII instead of box-drawing characters.
    pub ascii_only: bool,
    /// Use the brighter palette for low-color terminals.
    pub high_contrast: bool,
    /// Keep hint text static instead of blinking it.
    pub reduced_motion: bool,
}
