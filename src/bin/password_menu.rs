use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pwcodec::dynamic::min_edits_to_palindrome;
use pwcodec::randomized::{generate_password, DEFAULT_ALPHABET};
use pwcodec::security::PasswordPolicy;
use pwcodec::{CodecSession, Error, Result};

const MENU: &str = "Menu:
1. Encode Password
2. Decode Password
3. Show Huffman Codes
4. Check Password Validity
5. Check Password Strength
6. Generate Strong Password
7. Minimum Edits to Palindrome
8. Exit";

/// Runs the interactive menu until `8` is chosen or input ends.
///
/// The codec session lives only in this loop and is replaced on every encode.
fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    policy: &PasswordPolicy,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    let mut session: Option<CodecSession> = None;

    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            return Ok(());
        };
        let outcome = match choice.as_str() {
            "1" => {
                session = None;
                let Some(password) = prompt(input, out, "Enter your password to encode: ")?
                else {
                    return Ok(());
                };
                policy.validate(&password).and_then(|()| {
                    let built = CodecSession::build(&password)?;
                    let bits = built.encode(&password)?;
                    writeln!(out, "Encoded password: {}", bits)?;
                    writeln!(
                        out,
                        "{} bits for {} characters ({} distinct)",
                        bits.len(),
                        password.chars().count(),
                        built.symbol_count()
                    )?;
                    session = Some(built);
                    Ok(())
                })
            }
            "2" => match &session {
                None => writeln!(out, "No password has been encoded yet.").map_err(Error::from),
                Some(current) => {
                    let Some(bits) = prompt(input, out, "Enter the encoded password to decode: ")?
                    else {
                        return Ok(());
                    };
                    current
                        .decode_str(&bits)
                        .and_then(|decoded| Ok(writeln!(out, "Decoded password: {}", decoded)?))
                }
            },
            "3" => match &session {
                None => writeln!(out, "No Huffman tree available.").map_err(Error::from),
                Some(current) => {
                    writeln!(out, "Huffman Codes:")?;
                    for (symbol, code) in current.code_table() {
                        writeln!(out, "'{}': {}", symbol, code)?;
                    }
                    Ok(())
                }
            },
            "4" => {
                let Some(password) = prompt(input, out, "Enter the password to check validity: ")?
                else {
                    return Ok(());
                };
                match policy.validate(&password) {
                    Ok(()) => writeln!(out, "Password is valid.")?,
                    Err(err) => writeln!(out, "Password is invalid: {}", err)?,
                }
                Ok(())
            }
            "5" => {
                let Some(password) = prompt(input, out, "Enter a password to check its strength: ")?
                else {
                    return Ok(());
                };
                if policy.is_strong(&password) {
                    writeln!(out, "Password is strong.")?;
                } else {
                    writeln!(
                        out,
                        "Password is weak. It should be at least {} characters long, and include \
                         uppercase letters, lowercase letters, digits, and special characters.",
                        policy.strong_min_length
                    )?;
                }
                Ok(())
            }
            "6" => {
                let Some(length) = prompt(
                    input,
                    out,
                    "Enter the desired length for the password: ",
                )?
                else {
                    return Ok(());
                };
                length
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidInput(format!("not a length: {:?}", length)))
                    .and_then(|length| generate_password(length, &alphabet, rng))
                    .and_then(|password| Ok(writeln!(out, "Generated password: {}", password)?))
            }
            "7" => {
                let Some(text) = prompt(
                    input,
                    out,
                    "Enter the string to check minimum edits to palindrome: ",
                )?
                else {
                    return Ok(());
                };
                writeln!(
                    out,
                    "Minimum edits needed to make the string a palindrome: {}",
                    min_edits_to_palindrome(&text)
                )
                .map_err(Error::from)
            }
            "8" => {
                writeln!(out, "Exiting the program.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter a valid option.").map_err(Error::from),
        };

        if let Err(err) = outcome {
            writeln!(out, "Error: {}", err)?;
        }
    }
}

/// Writes `message` and reads one trimmed line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parses `--seed <n>`; without it the generator is seeded from the OS.
fn rng_from_args(args: &[String]) -> Result<ChaCha8Rng> {
    match args {
        [] => Ok(ChaCha8Rng::from_entropy()),
        [flag, seed] if flag == "--seed" => seed
            .parse()
            .map(ChaCha8Rng::seed_from_u64)
            .map_err(|_| Error::InvalidInput(format!("invalid seed: {:?}", seed))),
        _ => Err(Error::InvalidInput("usage: password_menu [--seed <n>]".to_string())),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut rng = rng_from_args(&args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &PasswordPolicy::default(),
        &mut rng,
    )
}
