//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Left operand (positional).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .value_name("LEFT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Left operand: TYPE, TYPE=VALUE or nil")
}

/// Operator symbol (positional).
pub fn op_arg() -> Arg {
    Arg::new("op")
        .value_name("OP")
        .required(true)
        .allow_hyphen_values(true)
        .help("Binary operator, e.g. + or <<")
}

/// Right operand (positional).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .value_name("RIGHT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Right operand: TYPE, TYPE=VALUE or nil")
}

/// Type expression to render (positional).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .required(true)
        .help("Type expression, e.g. *[]i32 or [str:u8]")
}

/// Machine word size (--word-size).
pub fn word_size_arg() -> Arg {
    Arg::new("word_size")
        .long("word-size")
        .value_name("BITS")
        .default_value("64")
        .value_parser(["32", "64"])
        .help("Width of int, uint, intptr and uintptr")
}

/// Emit JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the result as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log solver activity to stderr (-v for folding, -vv for dispatch)")
}

pub fn array_template_arg() -> Arg {
    template_arg("array_template", "array-template", "Template for arrays")
}

pub fn slice_template_arg() -> Arg {
    template_arg("slice_template", "slice-template", "Template for slices")
}

pub fn map_template_arg() -> Arg {
    template_arg("map_template", "map-template", "Template for maps")
}

pub fn tuple_template_arg() -> Arg {
    template_arg("tuple_template", "tuple-template", "Template for tuples")
}

pub fn func_template_arg() -> Arg {
    template_arg("func_template", "func-template", "Template for function types")
}

fn template_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("NAME")
        .help(help)
}
