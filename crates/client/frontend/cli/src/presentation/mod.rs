//! Ratatui presentation: terminal lifecycle, colors and the frame renderer.
pub mod renderer;
pub mod terminal;
pub mod theme;

pub use renderer::TerminalRenderer;
pub use terminal::TerminalSession;
pub use theme::Theme;
