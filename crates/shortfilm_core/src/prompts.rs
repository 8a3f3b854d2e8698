//! Deterministic prompt construction.

use crate::FilmStyle;

/// Prompt for the clip at `index` out of `total`.
///
/// Pure: the same arguments always give the same prompt. The first clip gets
/// an opening framing (even when it is also the last), the last clip a
/// closing one, and every other clip a continuation naming its 1-based scene
/// number.
///
/// # Examples
///
/// ```
/// use shortfilm_core::clip_prompt;
///
/// assert!(clip_prompt("A robot learns to paint", 0, 3).contains("Opening scene"));
/// assert!(clip_prompt("A robot learns to paint", 1, 3).contains("scene 2"));
/// assert!(clip_prompt("A robot learns to paint", 2, 3).contains("Final scene"));
/// ```
pub fn clip_prompt(premise: &str, index: usize, total: usize) -> String {
    if index == 0 {
        format!("{}. Opening scene, establishing shot. Smooth camera movement.", premise)
    } else if index + 1 >= total {
        format!("{}. Final scene, resolution. Dramatic conclusion.", premise)
    } else {
        format!(
            "{}. Continuing the story (scene {}). Build tension and progression.",
            premise,
            index + 1
        )
    }
}

/// Prompt for the starting frame.
pub fn image_prompt(premise: &str, style: FilmStyle) -> String {
    format!(
        "{}. {}. Opening shot, establishing scene. High quality, detailed.",
        premise,
        style.visual_keywords()
    )
}
