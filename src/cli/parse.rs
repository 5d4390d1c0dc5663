use super::CliFlags;
use crate::error::Error;
use crate::pass::Shuffle;

pub fn parse(args: &[String]) -> Result<CliFlags, Error> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "--save" => flags.save = true,
            "--naive" => flags.shuffle = Some(Shuffle::Naive),
            "--unbiased" => flags.shuffle = Some(Shuffle::Unbiased),
            flag @ ("-l" | "--length") => {
                let value = value_of(args, &mut i, flag)?;
                flags.length = Some(parse_int(value)?);
            }
            flag @ ("-n" | "--number") => {
                let value = value_of(args, &mut i, flag)?;
                flags.number = Some(
                    value
                        .parse()
                        .map_err(|_| Error::InvalidNumber(value.to_string()))?,
                );
            }
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, Error> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingValue(flag.to_string()))
}

/// Leading integer of a line of input, the way a `%d` read sees it:
/// whitespace skipped, then an optional sign and digits. Trailing text is
/// ignored.
pub fn parse_int(input: &str) -> Result<i64, Error> {
    let token = input.split_whitespace().next().unwrap_or("");
    let sign = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return Err(Error::InvalidNumber(token.to_string()));
    }
    token[..sign + digits]
        .parse()
        .map_err(|_| Error::InvalidNumber(token.to_string()))
}
