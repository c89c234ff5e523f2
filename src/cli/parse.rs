use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.replace('_', "")
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-p" | "--plain" => flags.plain = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => flags.length = Some(number(value(args, &mut i)?)?),
            "-n" | "--number" => flags.number = Some(number(value(args, &mut i)?)?),
            "--seed" => flags.seed = Some(number(value(args, &mut i)?)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("scramblepass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn combined_flags() {
        let flags = parse(&args(&["-l", "24", "--no-symbols", "-n", "1_000", "-q", "--seed", "7"])).unwrap();
        assert_eq!(flags.length, Some(24));
        assert_eq!(flags.number, Some(1000));
        assert_eq!(flags.seed, Some(7));
        assert!(flags.no_symbols && flags.quiet);
        assert!(!flags.no_numbers);
        assert_eq!(flags.count(), 1000);
    }

    #[test]
    fn count_defaults_to_one() {
        let flags = parse(&args(&["-n", "0"])).unwrap();
        assert_eq!(flags.count(), 1);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-l", "-3"])),
            Err(ParseError::InvalidNumber("-3".into()))
        );
        assert_eq!(
            parse(&args(&["--length"])),
            Err(ParseError::MissingValue("--length".into()))
        );
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
        assert_eq!(
            ParseError::MissingValue("-n".into()).to_string(),
            "Missing value for -n"
        );
    }
}
