//! Line-oriented commands: `add A-B-10`, `block A-B`, `path A C`, `show`

use saferoute_core::GraphError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { from: String, to: String, weight: i64 },
    Block { from: String, to: String },
    Path { start: String, end: String },
    Show,
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, GraphError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                // weight keeps its sign: "A-B--5" is a negative weight, not a fourth field
                let fields: Vec<&str> = rest.splitn(3, '-').map(str::trim).collect();
                let [from, to, weight] = fields[..] else {
                    return Err(invalid("expected add A-B-Distance"));
                };
                let weight = weight
                    .parse::<i64>()
                    .map_err(|_| invalid(&format!("distance '{}' is not an integer", weight)))?;
                Command::Add {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                }
            }
            "block" | "remove" => {
                let fields: Vec<&str> = rest.split('-').map(str::trim).collect();
                let [from, to] = fields[..] else {
                    return Err(invalid("expected block A-B"));
                };
                Command::Block {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            }
            "path" => {
                let fields: Vec<&str> = rest.split_whitespace().collect();
                let [start, end] = fields[..] else {
                    return Err(invalid("expected path START END"));
                };
                Command::Path {
                    start: start.to_string(),
                    end: end.to_string(),
                }
            }
            "show" if rest.is_empty() => Command::Show,
            _ => return Err(invalid(&format!("unknown command '{}'", line))),
        };
        Ok(Some(command))
    }
}

fn invalid(message: &str) -> GraphError {
    GraphError::InvalidInput(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_spaces() {
        let cmd = Command::parse("add  Camp - Bridge - 12 ").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Add {
                from: "Camp".into(),
                to: "Bridge".into(),
                weight: 12
            })
        );
    }

    #[test]
    fn negative_weight_reaches_the_engine() {
        let cmd = Command::parse("add A-B--5").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Add {
                from: "A".into(),
                to: "B".into(),
                weight: -5
            })
        );
    }

    #[test]
    fn parses_block_and_alias() {
        let expected = Some(Command::Block {
            from: "A".into(),
            to: "B".into(),
        });
        assert_eq!(Command::parse("block A-B").unwrap(), expected);
        assert_eq!(Command::parse("REMOVE A - B").unwrap(), expected);
    }

    #[test]
    fn parses_path_and_show() {
        assert_eq!(
            Command::parse("path A C").unwrap(),
            Some(Command::Path {
                start: "A".into(),
                end: "C".into()
            })
        );
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Show));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# roads after the storm").unwrap(), None);
    }

    #[test]
    fn malformed_lines_are_invalid_input() {
        for line in ["add A-B", "add A-B-ten", "block A", "path A", "fly A B", "show all"] {
            assert!(
                matches!(Command::parse(line), Err(GraphError::InvalidInput(_))),
                "{}",
                line
            );
        }
    }
}
