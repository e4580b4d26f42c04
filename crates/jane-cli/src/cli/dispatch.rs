//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to command handlers

use clap::ArgMatches;
use jane_core::WordSize;

use super::ColorChoice;
use crate::commands::render::RenderArgs;
use crate::commands::solve::SolveArgs;

pub struct SolveParams {
    pub left: String,
    pub op: String,
    pub right: String,
    pub word_size: WordSize,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl SolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: required(m, "left"),
            op: required(m, "op"),
            right: required(m, "right"),
            word_size: parse_word_size(m),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<SolveParams> for SolveArgs {
    fn from(p: SolveParams) -> Self {
        Self {
            left: p.left,
            op: p.op,
            right: p.right,
            word_size: p.word_size,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RenderParams {
    pub ty: String,
    pub array_template: Option<String>,
    pub slice_template: Option<String>,
    pub map_template: Option<String>,
    pub tuple_template: Option<String>,
    pub func_template: Option<String>,
    pub verbose: u8,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ty: required(m, "type"),
            array_template: m.get_one::<String>("array_template").cloned(),
            slice_template: m.get_one::<String>("slice_template").cloned(),
            map_template: m.get_one::<String>("map_template").cloned(),
            tuple_template: m.get_one::<String>("tuple_template").cloned(),
            func_template: m.get_one::<String>("func_template").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            ty: p.ty,
            array_template: p.array_template,
            slice_template: p.slice_template,
            map_template: p.map_template,
            tuple_template: p.tuple_template,
            func_template: p.func_template,
        }
    }
}

/// Clap enforces presence of required positionals before dispatch.
fn required(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}

fn parse_word_size(m: &ArgMatches) -> WordSize {
    m.get_one::<String>("word_size")
        .and_then(|bits| bits.parse().ok())
        .and_then(WordSize::from_bits)
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
