use crate::engines::generation::PathGenerator;
use crate::engines::validation::{InputValidator, INVALID_INPUT_MESSAGE, INVALID_INPUT_TITLE};
use crate::error::Result;
use crate::ui::state::AppState;

/// Where rejected input is reported
pub trait WarningSink {
    fn warn(&mut self, title: &str, message: &str);
}

/// Blocking native warning dialog
pub struct NativeWarning;

impl WarningSink for NativeWarning {
    fn warn(&mut self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

pub struct PathRunner;

impl PathRunner {
    /// Handle one Generate request. Rejected input is reported through `sink`
    /// and leaves the previous curve in place.
    pub fn run<W: WarningSink + ?Sized>(state: &mut AppState, sink: &mut W) -> Result<()> {
        let params = match InputValidator::validate(&state.inputs) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Rejected input: {}", e);
                state.status_message = INVALID_INPUT_TITLE.to_string();
                sink.warn(INVALID_INPUT_TITLE, INVALID_INPUT_MESSAGE);
                return Err(e);
            }
        };

        let curve = PathGenerator::for_params(&params).generate(&params);

        log::info!(
            "Generated path: {} terms, seed {}, {} samples",
            params.term_count,
            params.seed,
            curve.len()
        );
        state.status_message = format!("{} samples, {} terms", curve.len(), params.term_count);
        state.last_params = Some(params);
        state.curve = Some(curve);

        Ok(())
    }
}
