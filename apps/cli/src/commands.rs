use ncr_codec::{
    CodecConfig, EncodeOptions, NcrError, Radix, decode, decode_strict, encode_with, entities,
    find_config, load_config,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

pub struct Input {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> io::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.file {
            return fs::read_to_string(path);
        }

        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    fn from_argument(&self) -> bool {
        self.text.is_some()
    }
}

pub struct EncodeFlags {
    pub hexadecimal: bool,
    pub named: bool,
    pub markup: bool,
}

pub fn resolve_config(config: Option<&Path>) -> ncr_codec::Result<CodecConfig> {
    match config {
        Some(path) => load_config(path),
        None => find_config(&std::env::current_dir()?),
    }
}

pub fn encode_options(config: &CodecConfig, flags: &EncodeFlags) -> EncodeOptions {
    let defaults = config.encode_options();

    EncodeOptions {
        radix: if flags.hexadecimal {
            Radix::Hexadecimal
        } else {
            defaults.radix
        },
        named: defaults.named || flags.named,
        markup: defaults.markup || flags.markup,
    }
}

pub fn encode_text(
    input: &Input,
    flags: &EncodeFlags,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config)?;
    let options = encode_options(&config, flags);
    tracing::debug!(?options, "encoding");

    let text = input.read()?;
    write_output(&encode_with(&text, &options), input.from_argument())
}

pub fn decode_text(
    input: &Input,
    strict: bool,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config)?;
    let strict = strict || config.strict;
    tracing::debug!(strict, "decoding");

    let text = input.read()?;
    let output = if strict {
        decode_strict(&text)?
    } else {
        decode(&text)
    };
    write_output(&output, input.from_argument())
}

pub fn lookup_entity(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", describe_entity(query)?);
    Ok(())
}

pub fn describe_entity(query: &str) -> ncr_codec::Result<String> {
    let mut units = query.encode_utf16();
    if let (Some(unit), None) = (units.next(), units.next()) {
        if let Some(name) = entities::name_of(unit) {
            return Ok(format!("&{name}; U+{unit:04X}"));
        }
    }

    let name = query.trim_start_matches('&').trim_end_matches(';');
    match entities::lookup(name) {
        Some(unit) => Ok(format!(
            "&{name}; U+{unit:04X} {}",
            String::from_utf16_lossy(&[unit])
        )),
        None => Err(NcrError::UnknownEntity {
            name: query.to_string(),
        }),
    }
}

fn write_output(output: &str, newline: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    if newline {
        handle.write_all(b"\n")?;
    }
    handle.flush()?;
    Ok(())
}
