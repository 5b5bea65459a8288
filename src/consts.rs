//! Default markup contract and numeric constants.

// ── Markup contract ─────────────────────────────────────────────

/// Class marking elements for a one-shot fade-in reveal.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Class added to a fade-in element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Id of the reading-progress bar element.
pub const PROGRESS_BAR_ID: &str = "progress-bar";

/// Id of the button that enlarges chapter text.
pub const INCREASE_FONT_ID: &str = "increase-font";

/// Id of the button that shrinks chapter text.
pub const DECREASE_FONT_ID: &str = "decrease-font";

/// Selector for the container whose font size is adjusted.
pub const CHAPTER_CONTENT_SELECTOR: &str = ".chapter-content";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Margin around the viewport used for intersection checks.
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// ── Font size ───────────────────────────────────────────────────

/// Pixels added or removed per button click.
pub const FONT_STEP_PX: f64 = 2.0;

/// Smallest font size the decrease button can reach, in pixels.
pub const MIN_FONT_SIZE_PX: f64 = 12.0;

/// Baseline used when the container's computed font size can't be read.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

// ── Progress ────────────────────────────────────────────────────

/// Upper bound of the progress percentage.
pub const MAX_PROGRESS_PERCENT: f64 = 100.0;
