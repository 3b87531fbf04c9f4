//! State machines that pull quotes and plots out of wiki markup.
//!
//! Wiki pages have no quote or plot schema. Structure is inferred from
//! incidental formatting: headings bound sections, `dl`/`dd` hold dialogue
//! lines, bold text names the speaker and `hr` separates quotes. Each cue
//! only means something inside a particular section, so the extractors are
//! explicit state machines rather than one flat scan.

mod plot;
mod quotes;

pub use plot::{extract_plot, PlotMachine, PlotState, EDIT_ARTIFACT};
pub use quotes::{extract_episode_quotes, extract_season_quotes, QuoteMachine, QuoteState};

/// Whether the machine is finished with the token it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Consumed,
    /// Hand the same token to the new state.
    Reprocess,
}
