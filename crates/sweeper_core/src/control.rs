/// One parsed line of the control channel.
///
/// The first character selects the command; for the `add` commands the
/// rest of the line, unmodified, is the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Quit,
    AddLocation(String),
    AddCompany(String),
    AddTitle(String),
    Unrecognized(char),
}

impl ControlCommand {
    /// Parses a control line. Empty lines carry no command.
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let selector = chars.next()?;
        let rest = chars.as_str().to_owned();
        let command = match selector {
            'q' => ControlCommand::Quit,
            'l' => ControlCommand::AddLocation(rest),
            'c' => ControlCommand::AddCompany(rest),
            't' => ControlCommand::AddTitle(rest),
            other => ControlCommand::Unrecognized(other),
        };
        Some(command)
    }

    pub fn is_quit(line: &str) -> bool {
        line.starts_with('q')
    }
}
