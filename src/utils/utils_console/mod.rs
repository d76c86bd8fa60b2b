use std::io;
use std::io::BufRead;
use termion::{style, color::Rgb, color};
use crate::utils::utils_errors::KitchenGenError;

/// Prints the given string with the given color.
///
/// ## Example
/// ```
/// use kitchengen::utils::utils_console::{kitchengen_print, PrintMode, PrintColor};
/// kitchengen_print("test", PrintMode::Print, PrintColor::Blue, false);
/// ```
pub fn kitchengen_print(s: &str, mode: PrintMode, color: PrintColor, bolded: bool) {
    let mut string = "".to_string();
    if bolded { string += format!("{}", style::Bold).as_str() }
    if &color != &PrintColor::None {
        let c = color.get_color_triple();
        string += format!("{}", color::Fg(Rgb(c.0, c.1, c.2))).as_str();
    }
    string += s;
    string += format!("{}", style::Reset).as_str();
    match mode {
        PrintMode::Println => { println!("{}", string); }
        PrintMode::Print => { print!("{}", string); }
    }
}

pub fn kitchengen_print_new_line() {
    kitchengen_print("\n", PrintMode::Print, PrintColor::None, false);
}

/// Enum that is used in the kitchengen_print function.
/// Println will cause a new line after each line, while Print will not.
#[derive(Clone, Debug)]
pub enum PrintMode {
    Println,
    Print
}

/// Defines color for a kitchengen print command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintColor {
    None,
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta
}
impl PrintColor {
    pub fn get_color_triple(&self) -> (u8, u8, u8) {
        match self {
            PrintColor::None => { (0,0,0) }
            PrintColor::Blue => { return (0, 0, 255) }
            PrintColor::Green => { return (0, 255, 0) }
            PrintColor::Red => { return (255, 0, 0) }
            PrintColor::Yellow => { return (255, 255, 0) }
            PrintColor::Cyan => { return (0, 255, 255) }
            PrintColor::Magenta => { return (255, 0, 255) }
        }
    }
}

pub struct ConsoleInputUtils;
impl ConsoleInputUtils {
    pub fn get_console_input_string(prompt: &str, print_color: PrintColor) -> Result<String, KitchenGenError> {
        kitchengen_print(prompt, PrintMode::Println, print_color, true);
        let stdin = io::stdin();
        let line_option = stdin.lock().lines().next();
        return match line_option {
            Some(Ok(line)) => { Ok(line) }
            _ => { Err(KitchenGenError::new_generic_error_str("could not read a line from console input.", file!(), line!())) }
        }
    }
    /// Prints the enumerated option list and reads one line of input.  A well-formed
    /// in-range integer selects that option; anything else resolves to `default_idx`
    /// (or the first option when no default is given).  No re-prompt loop.
    pub fn choose_option(options: &[String], option_name: &str, default_idx: Option<usize>) -> usize {
        kitchengen_print(format!("{}s:", Self::capitalize(option_name)).as_str(), PrintMode::Println, PrintColor::None, false);
        for (i, option) in options.iter().enumerate() {
            kitchengen_print(format!("[{}] {}", i, option).as_str(), PrintMode::Println, PrintColor::None, false);
        }
        kitchengen_print_new_line();

        let fallback = match default_idx {
            None => { 0 }
            Some(idx) => { idx }
        };
        let prompt = format!("Choose an option 0 to {}, or any other key for default ({}): ", options.len() - 1, options[fallback]);
        let input_res = Self::get_console_input_string(prompt.as_str(), PrintColor::None);
        let chosen = match &input_res {
            Ok(input) => { Self::resolve_option_input(input, options.len(), default_idx) }
            Err(_) => { fallback }
        };
        if input_res.is_err() || chosen == fallback {
            kitchengen_print(format!("Using {} by default.", options[fallback]).as_str(), PrintMode::Println, PrintColor::None, false);
        }
        return chosen;
    }
    /// Resolution rule behind `choose_option`, separated from terminal I/O.  Out-of-range
    /// input falls back to the default rather than being clamped to the nearest valid index.
    pub fn resolve_option_input(input: &str, num_options: usize, default_idx: Option<usize>) -> usize {
        let parsed_res = input.trim().parse::<i64>();
        return match parsed_res {
            Ok(k) if k >= 0 && (k as usize) < num_options => { k as usize }
            _ => {
                match default_idx {
                    None => { 0 }
                    Some(idx) => { idx }
                }
            }
        }
    }
    fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        return match chars.next() {
            None => { "".to_string() }
            Some(c) => { c.to_uppercase().to_string() + chars.as_str() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_option_input_valid_indices() {
        assert_eq!(ConsoleInputUtils::resolve_option_input("0", 10, Some(4)), 0);
        assert_eq!(ConsoleInputUtils::resolve_option_input("9", 10, Some(4)), 9);
        assert_eq!(ConsoleInputUtils::resolve_option_input(" 3 ", 10, Some(4)), 3);
    }

    #[test]
    fn test_resolve_option_input_falls_back_to_default() {
        assert_eq!(ConsoleInputUtils::resolve_option_input("-1", 10, Some(4)), 4);
        assert_eq!(ConsoleInputUtils::resolve_option_input("abc", 10, Some(4)), 4);
        assert_eq!(ConsoleInputUtils::resolve_option_input("999", 10, Some(4)), 4);
        assert_eq!(ConsoleInputUtils::resolve_option_input("", 10, Some(4)), 4);
    }

    #[test]
    fn test_resolve_option_input_first_option_when_no_default() {
        assert_eq!(ConsoleInputUtils::resolve_option_input("not a number", 10, None), 0);
        assert_eq!(ConsoleInputUtils::resolve_option_input("10", 10, None), 0);
    }
}
