mod panel;

pub use panel::ChatPanel;
