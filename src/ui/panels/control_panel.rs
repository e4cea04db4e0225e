use crate::ui::state::AppState;
use crate::ui::widgets::InputField;

pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draws the five inputs and the Generate button; true means generate now
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let inputs = &mut state.inputs;
        let mut submitted = false;

        submitted |= InputField::show(ui, "Number of Terms:", &mut inputs.term_count);
        submitted |= InputField::show(ui, "Random Seed:", &mut inputs.seed);
        submitted |= InputField::show(ui, "Decay Factor 1:", &mut inputs.decay_factor_1);
        submitted |= InputField::show(ui, "Decay Factor 2:", &mut inputs.decay_factor_2);
        submitted |= InputField::show(ui, "Step Size:", &mut inputs.step_size);

        ui.add_space(8.0);

        ui.vertical_centered_justified(|ui| {
            if ui.button("Generate Path").clicked() {
                submitted = true;
            }
        });

        ui.separator();
        ui.small(&state.status_message);

        submitted
    }
}
