use crate::commands::{desktop, print_json, Context};
use crate::error::invalid_input;
use crate::util::{join_words, read_input_lines};
use anyhow::{Error, Result};
use clap::Args;
use serde::Serialize;
use std::io;
use tracing::debug;
use walink_core::{
    generate, sanitize, Feedback, LinkFailure, LinkOutputDto, LinkResult, SanitizedNumber,
};

#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Phone number; reads one number per line from stdin when omitted
    #[arg(value_name = "NUMBER")]
    pub number: Vec<String>,
    /// Copy the link to the clipboard
    #[arg(long)]
    pub copy: bool,
    /// Open the link in the default browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Phone number; reads one number per line from stdin when omitted
    #[arg(value_name = "NUMBER")]
    pub number: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SanitizedDto {
    input: String,
    sanitized: SanitizedNumber,
}

pub fn link(ctx: &Context<'_>, args: LinkArgs) -> Result<()> {
    match join_words(&args.number) {
        Some(raw) => link_one(ctx, &raw, &args),
        None => {
            if args.open {
                return Err(invalid_input("--open needs a single number argument"));
            }
            let lines = read_input_lines(io::stdin().lock())?;
            link_batch(ctx, &lines, &args)
        }
    }
}

fn link_one(ctx: &Context<'_>, raw: &str, args: &LinkArgs) -> Result<()> {
    let (sanitized, result) = convert(raw);
    if ctx.json {
        print_json(&LinkOutputDto::new(raw, &sanitized, &result))?;
    }

    let link = result.map_err(failure_error)?;
    if !ctx.json {
        println!("{}", link.link);
    }
    if args.copy {
        desktop::copy_text(ctx, &link.link)?;
    }
    if args.open {
        desktop::open(&link.link)?;
    }
    Ok(())
}

fn link_batch(ctx: &Context<'_>, lines: &[String], args: &LinkArgs) -> Result<()> {
    if lines.is_empty() {
        return Err(failure_error(LinkFailure::Empty));
    }

    let mut outputs = Vec::with_capacity(lines.len());
    let mut links = Vec::new();
    let mut failures = 0usize;
    for line in lines {
        let (sanitized, result) = convert(line);
        match &result {
            Ok(link) => {
                if !ctx.json {
                    println!("{}", link.link);
                }
                links.push(link.link.clone());
            }
            Err(failure) => {
                failures += 1;
                if !ctx.json {
                    eprintln!("{}: {}", line.trim(), Feedback::for_failure(*failure).text);
                }
            }
        }
        outputs.push(LinkOutputDto::new(line, &sanitized, &result));
    }

    if ctx.json {
        print_json(&outputs)?;
    }
    if args.copy && !links.is_empty() {
        desktop::copy_text(ctx, &links.join("\n"))?;
    }
    if failures > 0 {
        return Err(invalid_input(format!(
            "{} of {} numbers could not be converted",
            failures,
            lines.len()
        )));
    }
    Ok(())
}

pub fn sanitize_input(ctx: &Context<'_>, args: SanitizeArgs) -> Result<()> {
    let inputs = match join_words(&args.number) {
        Some(raw) => vec![raw],
        None => read_input_lines(io::stdin().lock())?,
    };

    let items: Vec<SanitizedDto> = inputs
        .into_iter()
        .map(|input| {
            let sanitized = sanitize(&input);
            SanitizedDto { input, sanitized }
        })
        .collect();

    if ctx.json {
        if args.number.is_empty() {
            print_json(&items)?;
        } else if let Some(item) = items.first() {
            print_json(item)?;
        }
        return Ok(());
    }

    for item in items {
        println!("{}", item.sanitized);
    }
    Ok(())
}

fn convert(raw: &str) -> (SanitizedNumber, LinkResult) {
    let result = generate(raw);
    let sanitized = sanitize(raw);
    debug!(input = raw, sanitized = %sanitized, ok = result.is_ok(), "converted input");
    (sanitized, result)
}

fn failure_error(failure: LinkFailure) -> Error {
    Error::new(failure).context(Feedback::for_failure(failure).text)
}
