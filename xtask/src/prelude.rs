pub use anstream::println as aprintln;

/// Terminal colors for plan output.
mod colors {
    pub const RESET: &str = "\x1b[0m";

    pub const RED: &str = "\x1b[38;2;247;118;142m";
    pub const GREEN: &str = "\x1b[38;2;158;206;106m";
    pub const YELLOW: &str = "\x1b[38;2;224;175;104m";
    pub const BLUE: &str = "\x1b[38;2;122;162;247m";
    pub const CYAN: &str = "\x1b[38;2;125;207;255m";
}

/// Print green text
pub fn p_g(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Print red text
pub fn p_r(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}

/// Print yellow text
pub fn p_y(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Print blue text
pub fn p_b(text: &str) -> String {
    format!("{}{}{}", colors::BLUE, text, colors::RESET)
}

/// Print cyan text
pub fn p_c(text: &str) -> String {
    format!("{}{}{}", colors::CYAN, text, colors::RESET)
}
