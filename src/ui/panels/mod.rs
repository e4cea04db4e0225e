pub mod control_panel;
pub mod plot_panel;

pub use control_panel::ControlPanel;
pub use plot_panel::PlotPanel;
