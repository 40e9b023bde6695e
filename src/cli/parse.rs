use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-V" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-v" | "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            "-u" | "--urandom" => flags.urandom = true,
            "--save" => flags.save = true,
            "-U" | "--upper" => flags.uppercase = true,
            "-d" | "--digits" => flags.digits = true,
            "-s" | "--special" => flags.special = true,
            "-a" | "--all" => {
                flags.uppercase = true;
                flags.digits = true;
                flags.special = true;
            }
            "-l" | "--length" => {
                // Kept as text: "-5" and "abc" are reported as invalid lengths
                flags.length = Some(value(args, &mut i)?.to_string());
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                let number = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| ParseError::InvalidNumber(raw.to_string()))?;
                flags.number = Some(number);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}
