mod sink;
mod terminal;

pub use sink::{NullSink, PresentationSink};
pub use terminal::TerminalPresenter;
