// Slash command handling

use anyhow::{bail, Context, Result};

pub enum Command {
    Help,
    Quit,
    Show(u32),
    Similar(u32),
    Recommend,
    List,
    Rate(u32, u8),
    Comment(u32, String),
}

impl Command {
    /// Parse a slash command. `Ok(None)` means the input is not a command
    /// and should go to the chat engine; malformed commands are errors.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        if !input.starts_with('/') {
            return Ok(None);
        }

        let mut parts = input.split_whitespace();
        let name = parts.next().unwrap_or("");

        let command = match name {
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            "/recept" => Command::Show(parse_id(parts.next())?),
            "/slicni" => Command::Similar(parse_id(parts.next())?),
            "/preporuci" => Command::Recommend,
            "/recepti" => Command::List,
            "/ocijeni" => {
                let id = parse_id(parts.next())?;
                let rating: u8 = parts
                    .next()
                    .context("usage: /ocijeni <id> <1-5>")?
                    .parse()
                    .context("rating must be a number between 1 and 5")?;
                Command::Rate(id, rating)
            }
            "/komentiraj" => {
                let id = parse_id(parts.next())?;
                let text = parts.collect::<Vec<_>>().join(" ");
                if text.is_empty() {
                    bail!("usage: /komentiraj <id> <tekst>");
                }
                Command::Comment(id, text)
            }
            other => bail!("unknown command: {other} (try /help)"),
        };
        Ok(Some(command))
    }
}

fn parse_id(arg: Option<&str>) -> Result<u32> {
    arg.context("missing recipe id")?
        .parse()
        .context("recipe id must be a number")
}

pub fn format_help() -> String {
    r#"Dostupne naredbe:
  /help               - Prikaži ovu poruku
  /quit               - Izlaz
  /recepti            - Popis svih recepata
  /recept <id>        - Detalji recepta (broji se kao pregled)
  /slicni <id>        - Recepti slični zadanom
  /preporuci          - Preporuke na temelju pregledanih recepata
  /ocijeni <id> <1-5> - Ocijeni recept
  /komentiraj <id> <tekst> - Komentiraj recept

Sve ostalo ide chatbotu - pitaj slobodno!"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(Command::parse("daj mi desert").unwrap().is_none());
    }

    #[test]
    fn test_parse_show() {
        match Command::parse("/recept 3").unwrap() {
            Some(Command::Show(3)) => {}
            _ => panic!("expected Show(3)"),
        }
    }

    #[test]
    fn test_parse_rate() {
        match Command::parse("/ocijeni 2 5").unwrap() {
            Some(Command::Rate(2, 5)) => {}
            _ => panic!("expected Rate(2, 5)"),
        }
    }

    #[test]
    fn test_parse_comment_joins_text() {
        match Command::parse("/komentiraj 7 odlično jelo").unwrap() {
            Some(Command::Comment(7, text)) => assert_eq!(text, "odlično jelo"),
            _ => panic!("expected Comment"),
        }
    }

    #[test]
    fn test_malformed_commands_error() {
        assert!(Command::parse("/recept").is_err());
        assert!(Command::parse("/recept abc").is_err());
        assert!(Command::parse("/ocijeni 2").is_err());
        assert!(Command::parse("/komentiraj 2").is_err());
        assert!(Command::parse("/nepoznato").is_err());
    }
}
