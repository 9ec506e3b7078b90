//! Tone voicing: maps a selected tone to the openers and sign-off the demo
//! generator writes with.

use crate::models::intake::Tone;

/// Phrasing calibrated to a specific tone.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    /// Hook openers, used in order.
    pub openers: Vec<&'static str>,
    /// How an outline frames its first beat.
    pub outline_frame: &'static str,
    /// Closing line appended to full posts.
    pub sign_off: &'static str,
}

/// Returns the voice preset for a tone.
pub fn get_tone_voice(tone: &Tone) -> ToneVoice {
    match tone {
        Tone::Direct => ToneVoice {
            openers: vec![
                "Stop doing this:",
                "Here's the truth:",
                "One rule:",
            ],
            outline_frame: "State the problem in one line",
            sign_off: "Fix it this week.",
        },
        Tone::Story => ToneVoice {
            openers: vec![
                "Last year I almost quit.",
                "A founder told me something I can't forget.",
                "It started with one bad call.",
            ],
            outline_frame: "Open on the moment it went wrong",
            sign_off: "That's the whole story. What would you have done?",
        },
        Tone::Contrarian => ToneVoice {
            openers: vec![
                "Unpopular opinion:",
                "Everyone says the opposite, but",
                "The advice you keep hearing is wrong:",
            ],
            outline_frame: "Name the popular belief you disagree with",
            sign_off: "Disagree? Tell me why.",
        },
        Tone::Mentor => ToneVoice {
            openers: vec![
                "If you're early, remember this:",
                "A quiet lesson from a decade of building:",
                "Take a breath. Then consider:",
            ],
            outline_frame: "Acknowledge where the reader is today",
            sign_off: "You're closer than you think.",
        },
    }
}
