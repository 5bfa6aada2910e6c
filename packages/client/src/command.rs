//! Interpretation of lines typed at the prompt.

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the line as a chat message
    Say(String),
    /// Ask the server to publish the recent history
    History,
    /// Close the connection and exit
    Quit,
    /// Blank input, nothing to do
    Nothing,
}

/// Interpret one line of input. Anything that is not a known `/` command is
/// sent as-is.
pub fn parse_input(line: &str) -> Command {
    match line.trim() {
        "" => Command::Nothing,
        "/history" => Command::History,
        "/quit" | "/exit" => Command::Quit,
        text => Command::Say(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_plain_text_is_said() {
        // テスト項目: 通常のテキストはそのまま送信コマンドになる
        // when (操作):
        let command = parse_input("hello there");

        // then (期待する結果):
        assert_eq!(command, Command::Say("hello there".to_string()));
    }

    #[test]
    fn test_parse_input_trims_surrounding_whitespace() {
        // テスト項目: 前後の空白は取り除かれる
        // when (操作):
        let command = parse_input("  hi  ");

        // then (期待する結果):
        assert_eq!(command, Command::Say("hi".to_string()));
    }

    #[test]
    fn test_parse_input_history_command() {
        // テスト項目: /history は履歴要求になる
        // when (操作):
        let command = parse_input("/history");

        // then (期待する結果):
        assert_eq!(command, Command::History);
    }

    #[test]
    fn test_parse_input_quit_commands() {
        // テスト項目: /quit と /exit はどちらも終了になる
        // then (期待する結果):
        assert_eq!(parse_input("/quit"), Command::Quit);
        assert_eq!(parse_input("/exit"), Command::Quit);
    }

    #[test]
    fn test_parse_input_blank_line_is_ignored() {
        // テスト項目: 空行は何も送らない
        // then (期待する結果):
        assert_eq!(parse_input(""), Command::Nothing);
        assert_eq!(parse_input("   "), Command::Nothing);
    }
}
