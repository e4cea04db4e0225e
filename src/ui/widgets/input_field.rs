/// Label stacked above a single-line text edit
pub struct InputField;

impl InputField {
    /// Returns true when the user pressed Enter in this field
    pub fn show(ui: &mut egui::Ui, label: &str, text: &mut String) -> bool {
        ui.label(label);
        let response = ui.add(egui::TextEdit::singleline(text).desired_width(f32::INFINITY));

        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
