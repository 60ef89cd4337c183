use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().cyan();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();
pub const PROMPT: Style = Style::new().green().bold();
